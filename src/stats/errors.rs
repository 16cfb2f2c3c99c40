//! stats::errors — error type for the statistics helpers.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the small statistics
//! routines in [`crate::stats`]. The helpers fail only on structurally
//! unusable input (an empty slice where a denominator would be zero, or
//! mismatched vector lengths), so the surface is deliberately tiny.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("need at
//!   least 2 elements") rather than implementation details.
//! - Algorithm-specific failures (capacity, draw counts, empty class
//!   collections) live in their own subtrees; this module covers only the
//!   shared numeric helpers.

pub type StatsResult<T> = Result<T, StatsError>;

/// StatsError — failure conditions for the statistics helpers.
///
/// Variants
/// --------
/// - `EmptyInput`
///   A helper whose denominator depends on the element count was called on
///   an empty slice (mean of 0 elements).
/// - `InsufficientData(len)`
///   The sample standard deviation was requested for fewer than 2 elements,
///   so the `n − 1` denominator would be zero.
/// - `LengthMismatch(left, right)`
///   Element-wise vector addition was attempted on slices of different
///   lengths.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    EmptyInput,
    InsufficientData(usize),
    LengthMismatch(usize, usize),
}

impl std::error::Error for StatsError {}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::EmptyInput => {
                write!(f, "Empty input: need at least 1 element.")
            }
            StatsError::InsufficientData(len) => {
                write!(
                    f,
                    "Insufficient data: got {len} elements, need at least 2 for a sample \
                     standard deviation."
                )
            }
            StatsError::LengthMismatch(left, right) => {
                write!(f, "Length mismatch: {left} vs {right} elements.")
            }
        }
    }
}
