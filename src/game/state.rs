//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck is full and nothing has been dealt.
    Ready,
    /// Cards are dealt and no round has been played.
    Dealt,
    /// At least one round has been played and cards remain.
    Playing,
    /// Both hands are empty.
    Finished,
}

/// Identifies one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first player, dealt to first.
    Player1,
    /// The second player.
    Player2,
}
