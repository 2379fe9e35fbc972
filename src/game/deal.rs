use crate::error::DealError;

use super::{Game, GameState};

impl Game {
    /// Shuffles the deck and deals it out alternately, player 1 first.
    ///
    /// Cards are drawn from the top of the deck two at a time until it is
    /// empty, so each player ends up with [`HAND_SIZE`](crate::HAND_SIZE)
    /// cards in draw order.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards have already been dealt.
    pub fn deal_cards(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Ready {
            return Err(DealError::InvalidState);
        }

        self.deck.shuffle(&mut self.rng);

        while let Some(card) = self.deck.draw() {
            self.player1.receive(card);
            if let Some(card) = self.deck.draw() {
                self.player2.receive(card);
            }
        }

        log::info!(
            "dealt {} cards to {} and {} cards to {}",
            self.player1.hand_len(),
            self.player1.name(),
            self.player2.hand_len(),
            self.player2.name()
        );

        self.state = GameState::Dealt;
        Ok(())
    }
}
