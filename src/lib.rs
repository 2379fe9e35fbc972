//! A two-player highest-card-wins card game with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that builds a 52-card [`Deck`], deals it
//! evenly between two [`Player`]s, and resolves rounds by comparing the
//! players' front cards until both hands are empty.
//!
//! # Example
//!
//! ```
//! use highcard::{Game, GameOptions, HAND_SIZE};
//!
//! let mut game = Game::new("Player 1", "Player 2", GameOptions::default(), 42);
//! game.deal_cards().unwrap();
//! game.play_game().unwrap();
//!
//! let report = game.score_report();
//! assert_eq!(
//!     report.player1_score + report.player2_score,
//!     HAND_SIZE as u32
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, HAND_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, RoundError};
pub use game::{Game, GameState, Seat, round_winner};
pub use options::{FaceOrdering, GameOptions};
pub use player::Player;
pub use result::{Outcome, RoundResult, ScoreReport};
