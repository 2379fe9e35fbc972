//! Game configuration options.

use core::cmp::Ordering;

use crate::card::Face;

/// How two faces are compared when a round is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaceOrdering {
    /// Byte-wise comparison of the face symbols.
    ///
    /// This is not card rank: `"10"` sorts before `"2"` and letters sort
    /// after digits, giving `10 < 2 < 3 < ... < 9 < A < J < K < Q`.
    #[default]
    Symbol,
    /// Canonical rank, Ace low: `A < 2 < ... < 10 < J < Q < K`.
    Rank,
}

impl FaceOrdering {
    /// Compares two faces.
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use highcard::{Face, FaceOrdering};
    ///
    /// assert_eq!(FaceOrdering::Symbol.compare(Face::Ten, Face::Two), Ordering::Less);
    /// assert_eq!(FaceOrdering::Rank.compare(Face::Ten, Face::Two), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare(self, a: Face, b: Face) -> Ordering {
        match self {
            Self::Symbol => a.symbol().cmp(b.symbol()),
            Self::Rank => a.rank().cmp(&b.rank()),
        }
    }
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use highcard::{FaceOrdering, GameOptions};
///
/// let options = GameOptions::default()
///     .with_face_ordering(FaceOrdering::Rank)
///     .with_points_per_round(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Face comparison used to pick each round's winner.
    pub face_ordering: FaceOrdering,
    /// Points awarded to the winner of a round.
    pub points_per_round: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            face_ordering: FaceOrdering::Symbol,
            points_per_round: 1,
        }
    }
}

impl GameOptions {
    /// Sets the face comparison.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{FaceOrdering, GameOptions};
    ///
    /// let options = GameOptions::default().with_face_ordering(FaceOrdering::Rank);
    /// assert_eq!(options.face_ordering, FaceOrdering::Rank);
    /// ```
    #[must_use]
    pub const fn with_face_ordering(mut self, ordering: FaceOrdering) -> Self {
        self.face_ordering = ordering;
        self
    }

    /// Sets the points awarded per round.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_points_per_round(3);
    /// assert_eq!(options.points_per_round, 3);
    /// ```
    #[must_use]
    pub const fn with_points_per_round(mut self, points: u32) -> Self {
        self.points_per_round = points;
        self
    }
}
