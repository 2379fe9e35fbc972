//! The 52-card deck.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Face, Suit};

/// An ordered deck of cards.
///
/// The top of the deck is the end of the sequence: [`Deck::draw`] removes the
/// last card. A deck starts full and only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in deck order (suit-major, face-minor).
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for face in Face::ALL {
                cards.push(Card::new(suit, face));
            }
        }

        Self { cards }
    }

    /// Shuffles the deck in place.
    ///
    /// Uses the backward Fisher-Yates shuffle: for each index `i` from the
    /// last down to 1, a uniform index `j` in `0..=i` is drawn and the two
    /// cards are swapped.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        log::trace!("shuffled {} cards", self.cards.len());
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards remaining, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
