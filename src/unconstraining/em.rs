//! unconstraining::em — expectation-maximization over censored demand.
//!
//! Purpose
//! -------
//! Recover the latent Normal demand distribution behind a booking history
//! in which some departures closed early, so their observed counts truncate
//! the demand that actually showed up.
//!
//! Key behaviors
//! -------------
//! - E-step: each censored record's demand estimate becomes the conditional
//!   expectation of the current Normal above the observed count,
//!   `mean + std · φ(z) / (1 − Φ(z))` with `z = (count − mean) / std`, the
//!   inverse Mills ratio form. Uncensored records are pinned back to their
//!   observed counts every pass.
//! - M-step: the mean and sample standard deviation (n − 1 denominator) of
//!   the completed history become the next iterate.
//! - The loop stops when the mean moves by less than the threshold between
//!   consecutive iterations, or when the iteration cap is reached; hitting
//!   the cap is normal termination, reported via `converged = false`.
//!
//! Invariants & assumptions
//! ------------------------
//! - A censored record's estimate never drops below its observed count; the
//!   conditional expectation of the upper tail always sits at or above the
//!   truncation point.
//! - When the survival probability underflows (the count sits far in the
//!   upper tail of the current iterate), the record keeps its previous
//!   estimate rather than dividing by zero.
//! - A zero-variance iterate leaves censored estimates untouched; the
//!   degenerate distribution carries no tail mass to average over.
//!
//! Testing notes
//! -------------
//! - Single-iteration behavior is pinned against hand-computed inverse
//!   Mills ratios; the full pipeline into an optimizer run lives in the
//!   integration tests.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::stats;
use crate::unconstraining::errors::{EmError, EmResult};
use crate::unconstraining::observation::HistoricalBooking;

/// Termination policy for the expectation-maximization loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoppingCriterion {
    max_iterations: usize,
    min_mean_delta: f64,
}

impl StoppingCriterion {
    /// Validate and build a stopping criterion.
    ///
    /// Parameters
    /// ----------
    /// - `max_iterations`: `usize`
    ///   Hard cap on EM iterations; at least 1.
    /// - `min_mean_delta`: `f64`
    ///   Mean movement below which the loop declares convergence; finite
    ///   and non-negative.
    ///
    /// Returns
    /// -------
    /// `EmResult<StoppingCriterion>`
    ///   - `Ok(criterion)` on valid inputs.
    ///   - `Err(EmError::InvalidIterationCap | InvalidMeanDelta)` otherwise.
    pub fn new(max_iterations: usize, min_mean_delta: f64) -> EmResult<Self> {
        if max_iterations == 0 {
            return Err(EmError::InvalidIterationCap);
        }
        if !min_mean_delta.is_finite() || min_mean_delta < 0.0 {
            return Err(EmError::InvalidMeanDelta(min_mean_delta));
        }
        Ok(StoppingCriterion { max_iterations, min_mean_delta })
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn min_mean_delta(&self) -> f64 {
        self.min_mean_delta
    }
}

/// Final demand distribution recovered by [`unconstrain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnconstrainedDemand {
    /// Mean of the recovered demand distribution.
    pub mean: f64,
    /// Sample standard deviation of the recovered distribution.
    pub standard_deviation: f64,
    /// Number of EM iterations actually performed.
    pub iterations: usize,
    /// Whether the mean-delta threshold was met before the iteration cap.
    pub converged: bool,
}

/// Unconstrain a censored booking history by expectation-maximization.
///
/// Parameters
/// ----------
/// - `history`: `&mut [HistoricalBooking]`
///   Booking records; mutated in place so callers can read the per-record
///   demand estimates after the run.
/// - `seed_mean`: `f64`
///   Starting mean, typically the mean of the raw counts; finite.
/// - `seed_std_dev`: `f64`
///   Starting standard deviation; finite and non-negative.
/// - `criterion`: `StoppingCriterion`
///   Termination policy.
///
/// Returns
/// -------
/// `EmResult<UnconstrainedDemand>`
///   - `Ok(demand)` with the recovered distribution and loop diagnostics.
///   - `Err(EmError::EmptyHistory | InvalidSeedMean | InvalidSeedStdDev)`
///     on structural input errors, before any record is touched.
pub fn unconstrain(
    history: &mut [HistoricalBooking], seed_mean: f64, seed_std_dev: f64,
    criterion: StoppingCriterion,
) -> EmResult<UnconstrainedDemand> {
    if history.is_empty() {
        return Err(EmError::EmptyHistory);
    }
    if !seed_mean.is_finite() {
        return Err(EmError::InvalidSeedMean(seed_mean));
    }
    if !seed_std_dev.is_finite() || seed_std_dev < 0.0 {
        return Err(EmError::InvalidSeedStdDev(seed_std_dev));
    }

    let mut mean = seed_mean;
    let mut std_dev = seed_std_dev;
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..criterion.max_iterations() {
        iterations += 1;

        complete_history(history, mean, std_dev);
        let (next_mean, next_std_dev) = refit(history, std_dev);

        let delta = (next_mean - mean).abs();
        mean = next_mean;
        std_dev = next_std_dev;

        if delta < criterion.min_mean_delta() {
            converged = true;
            break;
        }
    }

    Ok(UnconstrainedDemand { mean, standard_deviation: std_dev, iterations, converged })
}

/// E-step: replace every censored estimate with the conditional expectation
/// of the current iterate above the observed count.
fn complete_history(history: &mut [HistoricalBooking], mean: f64, std_dev: f64) {
    let standard = if std_dev > 0.0 {
        Some(Normal::new(0.0, 1.0).expect("unit parameters"))
    } else {
        None
    };

    for record in history.iter_mut() {
        if !record.censored() {
            record.set_unconstrained_demand(record.booking_count());
            continue;
        }
        let Some(standard) = &standard else {
            continue;
        };
        let z = (record.booking_count() - mean) / std_dev;
        let survival = 1.0 - standard.cdf(z);
        if survival <= f64::MIN_POSITIVE {
            // Tail mass underflowed: keep the previous estimate.
            continue;
        }
        let estimate = mean + std_dev * standard.pdf(z) / survival;
        record.set_unconstrained_demand(estimate.max(record.booking_count()));
    }
}

/// M-step: refit mean and sample standard deviation to the completed
/// history. A single-record history keeps the previous standard deviation.
fn refit(history: &[HistoricalBooking], previous_std_dev: f64) -> (f64, f64) {
    let demands: Vec<f64> = history.iter().map(HistoricalBooking::unconstrained_demand).collect();
    let mean = stats::mean(&demands).expect("history is non-empty");
    let std_dev = stats::standard_deviation(&demands, mean).unwrap_or(previous_std_dev);
    (mean, std_dev)
}
