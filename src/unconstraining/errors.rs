//! unconstraining::errors — error taxonomy for demand unconstraining.
//!
//! Purpose
//! -------
//! Centralized error enum and `Result` alias for historical-booking
//! construction and the expectation-maximization routine. Every variant
//! carries the offending value so messages pinpoint the bad input.
//!
//! Downstream usage
//! ----------------
//! Returned by [`crate::unconstraining::HistoricalBooking::new`],
//! [`crate::unconstraining::StoppingCriterion::new`], and
//! [`crate::unconstraining::unconstrain`].

use std::fmt;

/// Convenient alias for unconstraining results.
pub type EmResult<T> = Result<T, EmError>;

/// Input errors surfaced by the unconstraining module.
#[derive(Debug, Clone, PartialEq)]
pub enum EmError {
    /// The booking history holds no records.
    EmptyHistory,
    /// A booking count was negative or non-finite.
    InvalidBookingCount(f64),
    /// The iteration cap was zero.
    InvalidIterationCap,
    /// The mean-delta threshold was negative or non-finite.
    InvalidMeanDelta(f64),
    /// The seed mean was non-finite.
    InvalidSeedMean(f64),
    /// The seed standard deviation was negative or non-finite.
    InvalidSeedStdDev(f64),
}

impl fmt::Display for EmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmError::EmptyHistory => {
                write!(f, "booking history must hold at least one record")
            }
            EmError::InvalidBookingCount(count) => {
                write!(f, "booking count must be finite and non-negative, got {count}")
            }
            EmError::InvalidIterationCap => {
                write!(f, "iteration cap must be at least 1")
            }
            EmError::InvalidMeanDelta(delta) => {
                write!(f, "mean-delta threshold must be finite and non-negative, got {delta}")
            }
            EmError::InvalidSeedMean(mean) => {
                write!(f, "seed mean must be finite, got {mean}")
            }
            EmError::InvalidSeedStdDev(std_dev) => {
                write!(f, "seed standard deviation must be finite and non-negative, got {std_dev}")
            }
        }
    }
}

impl std::error::Error for EmError {}
