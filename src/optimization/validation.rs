//! optimization::validation — shared input guards for the optimizers.
//!
//! Purpose
//! -------
//! Centralize the structural input checks both optimizers perform before any
//! computation: a finite positive capacity, at least one fare class, and a
//! positive Monte Carlo draw count. This keeps the guard logic in one place
//! and out of the algorithm bodies.
//!
//! Key behaviors
//! -------------
//! - Map invalid inputs into structured [`OptimError`] values; never panic on
//!   user-facing input.
//! - Enforce the draw-count recommendation of [`RECOMMENDED_MIN_DRAWS`] as a
//!   soft floor: below it, statistical stability degrades but the estimate
//!   stays defined, so the guard emits a `log::warn!` and proceeds.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch and the soft-floor pass-through.

use crate::optimization::errors::{OptimError, OptimResult};

/// Minimum recommended number of Monte Carlo draws. Below this the estimate
/// is still defined but statistically unstable; the guard warns and proceeds.
pub const RECOMMENDED_MIN_DRAWS: usize = 100;

/// Validate the cabin capacity: finite and strictly positive.
///
/// Returns
/// -------
/// `OptimResult<()>`
///   - `Ok(())` when `capacity` is a finite number > 0.
///   - `Err(OptimError::InvalidCapacity)` otherwise (NaN included).
pub fn validate_capacity(capacity: f64) -> OptimResult<()> {
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err(OptimError::InvalidCapacity(capacity));
    }
    Ok(())
}

/// Validate the class count: at least one fare class.
///
/// Returns
/// -------
/// `OptimResult<()>`
///   - `Ok(())` when `count >= 1`.
///   - `Err(OptimError::InsufficientClasses(0))` for an empty cabin.
pub fn validate_class_count(count: usize) -> OptimResult<()> {
    if count == 0 {
        return Err(OptimError::InsufficientClasses(count));
    }
    Ok(())
}

/// Validate the Monte Carlo draw count.
///
/// A zero draw count is an error; a count below [`RECOMMENDED_MIN_DRAWS`]
/// passes with a warning, since the sample-average estimate degrades but
/// does not become undefined.
///
/// Returns
/// -------
/// `OptimResult<()>`
///   - `Ok(())` when `draws >= 1` (warning below the recommended floor).
///   - `Err(OptimError::InvalidDrawCount(0))` when `draws == 0`.
pub fn validate_draw_count(draws: usize) -> OptimResult<()> {
    if draws == 0 {
        return Err(OptimError::InvalidDrawCount(draws));
    }
    if draws < RECOMMENDED_MIN_DRAWS {
        log::warn!(
            "Monte Carlo draw count {draws} is below the recommended minimum \
             {RECOMMENDED_MIN_DRAWS}; protection estimates may be statistically unstable"
        );
    }
    Ok(())
}
