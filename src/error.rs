//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur while playing rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Cards have not been dealt yet.
    #[error("invalid game state for playing a round")]
    InvalidState,
    /// A player has no cards left to play.
    #[error("a player has no cards left")]
    HandsExhausted,
}
