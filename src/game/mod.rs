//! Game engine and state management.

use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{Outcome, ScoreReport};

mod deal;
mod round;
pub mod state;

pub use round::round_winner;
pub use state::{GameState, Seat};

/// A two-player highest-card-wins game.
///
/// The game owns the deck and both players for a single play-through:
/// [`deal_cards`](Self::deal_cards), then [`play_game`](Self::play_game)
/// (or [`play_round`](Self::play_round) repeatedly), then
/// [`score_report`](Self::score_report).
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// The player dealt to first.
    player1: Player,
    /// The player dealt to second.
    player2: Player,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Rounds resolved so far.
    rounds_played: usize,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new("Alice", "Bob", GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Ready);
    /// ```
    #[must_use]
    pub fn new(
        player1: impl Into<String>,
        player2: impl Into<String>,
        options: GameOptions,
        seed: u64,
    ) -> Self {
        Self {
            deck: Deck::new(),
            player1: Player::new(player1),
            player2: Player::new(player2),
            options,
            state: GameState::Ready,
            rounds_played: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player in the given seat.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Player1 => &self.player1,
            Seat::Player2 => &self.player2,
        }
    }

    /// Returns the first player.
    #[must_use]
    pub const fn player1(&self) -> &Player {
        &self.player1
    }

    /// Returns the second player.
    #[must_use]
    pub const fn player2(&self) -> &Player {
        &self.player2
    }

    /// Returns the number of rounds resolved so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the outcome based on the current scores.
    ///
    /// Player 1 wins with a strictly higher score, player 2 wins with a
    /// strictly higher score, otherwise it is a tie.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.player1.score(), self.player2.score())
    }

    /// Builds the final score report.
    ///
    /// This does not modify the game and may be called in any state.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{Game, GameOptions};
    ///
    /// let game = Game::new("Alice", "Bob", GameOptions::default(), 1);
    /// let report = game.score_report();
    /// assert_eq!(report.to_string(), "Final Score: Alice: 0, Bob: 0\nIt's a tie!");
    /// ```
    #[must_use]
    pub fn score_report(&self) -> ScoreReport {
        ScoreReport {
            player1_name: self.player1.name().into(),
            player1_score: self.player1.score(),
            player2_name: self.player2.name().into(),
            player2_score: self.player2.score(),
            outcome: self.outcome(),
        }
    }
}
