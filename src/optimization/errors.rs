//! optimization::errors — error type shared by both optimizers.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the dynamic-programming and
//! Monte-Carlo-integration optimizers. Both fail only on structural input
//! errors (capacity, class count, draw count); numeric degeneracies inside
//! the algorithms use documented fallback values instead of errors.
//!
//! Conventions
//! -----------
//! - Structural errors are raised immediately and never retried here;
//!   retry/backoff belongs to callers orchestrating repeated runs.
//! - Error messages are phrased in terms of domain constraints ("capacity
//!   must be positive") rather than low-level details.

pub type OptimResult<T> = Result<T, OptimError>;

/// OptimError — structural input failures of the optimizers.
///
/// Variants
/// --------
/// - `InvalidCapacity(capacity)`
///   The cabin capacity is not a finite, strictly positive number.
/// - `InsufficientClasses(count)`
///   Fewer classes than the algorithm requires (at least 1).
/// - `InvalidDrawCount(draws)`
///   The Monte Carlo draw count K is 0. Draw counts below the recommended
///   floor of 100 are a soft warning, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimError {
    InvalidCapacity(f64),
    InsufficientClasses(usize),
    InvalidDrawCount(usize),
}

impl std::error::Error for OptimError {}

impl std::fmt::Display for OptimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimError::InvalidCapacity(capacity) => {
                write!(f, "Invalid capacity: {capacity}. Must be finite and positive.")
            }
            OptimError::InsufficientClasses(count) => {
                write!(f, "Insufficient fare classes: got {count}, need at least 1.")
            }
            OptimError::InvalidDrawCount(draws) => {
                write!(f, "Invalid Monte Carlo draw count: {draws}. Must be positive.")
            }
        }
    }
}
