use core::cmp::Ordering;

use crate::card::Card;
use crate::error::RoundError;
use crate::options::FaceOrdering;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState, Seat};

/// Picks the winner of a round.
///
/// Player 1 wins only if their face compares strictly greater. Every other
/// result, equal faces included, goes to player 2.
///
/// # Example
///
/// ```
/// use highcard::{round_winner, Card, Face, FaceOrdering, Seat, Suit};
///
/// let king = Card::new(Suit::Spades, Face::King);
/// let other_king = Card::new(Suit::Hearts, Face::King);
/// assert_eq!(round_winner(FaceOrdering::Symbol, king, other_king), Seat::Player2);
/// ```
#[must_use]
pub fn round_winner(ordering: FaceOrdering, player1: Card, player2: Card) -> Seat {
    if ordering.compare(player1.face, player2.face) == Ordering::Greater {
        Seat::Player1
    } else {
        Seat::Player2
    }
}

impl Game {
    /// Plays one round: each player plays their front card and the winner
    /// scores.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have not been dealt, or if either player has
    /// no cards left.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        match self.state {
            GameState::Dealt | GameState::Playing => {}
            GameState::Finished => return Err(RoundError::HandsExhausted),
            GameState::Ready => return Err(RoundError::InvalidState),
        }

        if !self.player1.has_cards() || !self.player2.has_cards() {
            return Err(RoundError::HandsExhausted);
        }

        let (Some(player1_card), Some(player2_card)) =
            (self.player1.play_card(), self.player2.play_card())
        else {
            return Err(RoundError::HandsExhausted);
        };

        let winner = round_winner(self.options.face_ordering, player1_card, player2_card);
        let points = self.options.points_per_round;
        match winner {
            Seat::Player1 => self.player1.add_points(points),
            Seat::Player2 => self.player2.add_points(points),
        }

        self.rounds_played += 1;
        log::debug!(
            "round {}: {} vs {}, {} scores",
            self.rounds_played,
            player1_card,
            player2_card,
            self.player(winner).name()
        );

        self.state = if self.player1.has_cards() && self.player2.has_cards() {
            GameState::Playing
        } else {
            GameState::Finished
        };

        Ok(RoundResult {
            round: self.rounds_played,
            player1_card,
            player2_card,
            winner,
            points,
        })
    }

    /// Plays rounds until a hand runs out and returns the outcome.
    ///
    /// After a full deal this is exactly [`HAND_SIZE`](crate::HAND_SIZE)
    /// rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if cards have not been dealt.
    pub fn play_game(&mut self) -> Result<Outcome, RoundError> {
        if self.state == GameState::Ready {
            return Err(RoundError::InvalidState);
        }

        while self.player1.has_cards() && self.player2.has_cards() {
            self.play_round()?;
        }

        let outcome = self.outcome();
        log::info!(
            "game over after {} rounds: {} {}, {} {}",
            self.rounds_played,
            self.player1.name(),
            self.player1.score(),
            self.player2.name(),
            self.player2.score()
        );
        Ok(outcome)
    }
}
