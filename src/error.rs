//! Error kinds reported by rank operations.

use thiserror::Error;

/// Convenience type alias for Results using [`RankError`].
pub type Result<T, E = RankError> = std::result::Result<T, E>;

/// Every failure a rank operation can report.
///
/// These are deterministic, input-dependent conditions. Retrying with the
/// same input always fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// An engine was configured with a precision limit of zero.
    #[error("bad initialization param, limit must be greater than 0")]
    BadLimit,

    /// The input contains a character outside the alphabet.
    #[error("invalid digit input, allowed digits: {}", crate::alphabet::DIGITS)]
    InvalidRank,

    /// The input is already beyond the largest rank.
    #[error("rank overflow, maximum value: {}", crate::alphabet::RANK_MAX)]
    Overflow,

    /// The input is empty or below the smallest rank.
    #[error("rank underflow, minimum value: {}", crate::alphabet::RANK_MIN)]
    Underflow,
}
