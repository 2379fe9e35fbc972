//! Round and game result types.

extern crate alloc;

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;
use crate::game::Seat;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// One-based round number.
    pub round: usize,
    /// The card played by player 1.
    pub player1_card: Card,
    /// The card played by player 2.
    pub player2_card: Card,
    /// The seat that won the round.
    pub winner: Seat,
    /// Points awarded to the winner.
    pub points: u32,
}

/// Final outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player 1 has the higher score.
    Player1Wins,
    /// Player 2 has the higher score.
    Player2Wins,
    /// Scores are equal.
    Tie,
}

impl Outcome {
    /// Determines the outcome from the two scores.
    #[must_use]
    pub fn from_scores(player1: u32, player2: u32) -> Self {
        match player1.cmp(&player2) {
            Ordering::Greater => Self::Player1Wins,
            Ordering::Less => Self::Player2Wins,
            Ordering::Equal => Self::Tie,
        }
    }

    /// Returns the winning seat, or `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::Player1Wins => Some(Seat::Player1),
            Self::Player2Wins => Some(Seat::Player2),
            Self::Tie => None,
        }
    }
}

/// Final scores and outcome, ready for display.
///
/// Renders as two lines:
///
/// ```text
/// Final Score: Alice: 14, Bob: 12
/// Alice wins!
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    /// Player 1's name.
    pub player1_name: String,
    /// Player 1's score.
    pub player1_score: u32,
    /// Player 2's name.
    pub player2_name: String,
    /// Player 2's score.
    pub player2_score: u32,
    /// The outcome.
    pub outcome: Outcome,
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Final Score: {}: {}, {}: {}",
            self.player1_name, self.player1_score, self.player2_name, self.player2_score
        )?;
        match self.outcome {
            Outcome::Tie => write!(f, "It's a tie!"),
            Outcome::Player1Wins => write!(f, "{} wins!", self.player1_name),
            Outcome::Player2Wins => write!(f, "{} wins!", self.player2_name),
        }
    }
}
