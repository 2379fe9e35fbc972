//! Card and deck tests.

use std::collections::HashSet;

use highcard::{Card, DECK_SIZE, Deck, Face, Player, Suit};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator that always yields zero, so every draw in `0..=i` picks 0.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

fn card_set(cards: &[Card]) -> HashSet<Card> {
    cards.iter().copied().collect()
}

#[test]
fn new_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let set = card_set(deck.cards());
    assert_eq!(set.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for face in Face::ALL {
            assert!(set.contains(&Card::new(suit, face)), "missing {face:?} of {suit:?}");
        }
    }
}

#[test]
fn new_deck_is_suit_major() {
    let deck = Deck::new();
    let cards = deck.cards();

    assert_eq!(cards[0], Card::new(Suit::Spades, Face::Ace));
    assert_eq!(cards[12], Card::new(Suit::Spades, Face::King));
    assert_eq!(cards[13], Card::new(Suit::Hearts, Face::Ace));
    assert_eq!(cards[DECK_SIZE - 1], Card::new(Suit::Diamonds, Face::King));
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::new();

    let card1 = deck.draw();
    let card2 = deck.draw();

    assert_eq!(deck.len(), 50);
    assert_eq!(card1, Some(Card::new(Suit::Diamonds, Face::King)));
    assert_eq!(card2, Some(Card::new(Suit::Diamonds, Face::Queen)));
}

#[test]
fn draw_from_empty_deck_returns_none() {
    let mut deck = Deck::new();

    for remaining in (0..DECK_SIZE).rev() {
        assert!(deck.draw().is_some());
        assert_eq!(deck.len(), remaining);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), None);
    assert_eq!(deck.draw(), None);
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(card_set(deck.cards()), card_set(Deck::new().cards()));
    assert_ne!(deck, Deck::new());
}

#[test]
fn shuffle_is_reproducible_with_a_seed() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(first, second);

    let mut third = Deck::new();
    third.shuffle(&mut ChaCha8Rng::seed_from_u64(100));
    assert_ne!(first, third);
}

#[test]
fn shuffle_swaps_from_the_last_index_down() {
    // Swapping each index from the last down to 1 with index 0 rotates the
    // deck left by one.
    let mut deck = Deck::new();
    deck.shuffle(&mut ZeroRng);

    let mut expected = Deck::new().cards().to_vec();
    expected.rotate_left(1);
    assert_eq!(deck.cards(), expected.as_slice());
    assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Face::Two));
    assert_eq!(deck.cards()[DECK_SIZE - 1], Card::new(Suit::Spades, Face::Ace));
}

#[test]
fn card_display_uses_symbols() {
    assert_eq!(Card::new(Suit::Hearts, Face::Ten).to_string(), "10♥");
    assert_eq!(Card::new(Suit::Spades, Face::Ace).to_string(), "A♠");
    assert_eq!(Card::new(Suit::Diamonds, Face::Queen).to_string(), "Q♦");
}

#[test]
fn face_ranks_are_canonical() {
    let ranks: Vec<u8> = Face::ALL.iter().map(|face| face.rank()).collect();
    assert_eq!(ranks, (1..=13).collect::<Vec<u8>>());
}

#[test]
fn player_hand_is_first_in_first_out() {
    let mut player = Player::new("Alice");
    let first = Card::new(Suit::Clubs, Face::Two);
    let second = Card::new(Suit::Hearts, Face::Jack);
    player.receive(first);
    player.receive(second);

    assert_eq!(player.hand_len(), 2);
    assert_eq!(player.play_card(), Some(first));
    assert_eq!(player.play_card(), Some(second));
    assert_eq!(player.play_card(), None);
    assert!(!player.has_cards());
}

#[test]
fn player_points_accumulate() {
    let mut player = Player::new("Bob");
    assert_eq!(player.name(), "Bob");
    assert_eq!(player.score(), 0);

    player.add_points(1);
    player.add_points(1);
    player.add_points(3);
    assert_eq!(player.score(), 5);
}

#[test]
fn player_points_saturate() {
    let mut player = Player::new("Carol");
    player.add_points(u32::MAX);
    player.add_points(1);
    assert_eq!(player.score(), u32::MAX);
}
