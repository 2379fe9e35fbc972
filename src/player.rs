//! Player state.

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::card::Card;

/// A player with a hand of cards and a running score.
///
/// The hand is a queue: dealt cards go to the back and [`Player::play_card`]
/// takes from the front.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: VecDeque<Card>,
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand and a score of zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
            score: 0,
        }
    }

    /// Adds a card to the back of the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    /// Removes and returns the card at the front of the hand.
    ///
    /// Returns `None` if the hand is empty.
    pub fn play_card(&mut self) -> Option<Card> {
        self.hand.pop_front()
    }

    /// Adds points to the score, saturating at `u32::MAX`.
    pub const fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the hand, front first.
    #[must_use]
    pub const fn hand(&self) -> &VecDeque<Card> {
        &self.hand
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand still holds cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }
}
