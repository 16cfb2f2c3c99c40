//! optimization::dynamic_programming — closed-form nested protection levels.
//!
//! Purpose
//! -------
//! Compute cumulated protection levels, booking limits, and the bid-price
//! vector for a cabin of nested fare classes by backward induction over the
//! classical nested-protection formulation (Talluri & Van Ryzin, *The Theory
//! and Practice of Revenue Management*, pp. 41–42).
//!
//! Key behaviors
//! -------------
//! - Process the protection boundaries from the highest classes down: pool
//!   classes 1..j into a single Normal pseudo-class (mean = Σ means,
//!   variance = Σ variances under independence) priced at the
//!   demand-weighted average yield, and protect the pool against class j+1
//!   at the indifference quantile
//!   `yⱼ = μ_pool + σ_pool · Φ⁻¹(1 − yieldⱼ₊₁ / ȳ_pool)`.
//! - For two classes this reduces to the closed form
//!   `y₁ = mean₁ + std₁ · Φ⁻¹(1 − yield₂ / yield₁)`.
//! - Clamp boundaries non-negative and non-decreasing, give the lowest
//!   class the remaining capacity, run the cabin's ledger passes, and
//!   return the bid-price step function.
//!
//! Invariants & assumptions
//! ------------------------
//! - The cabin's classes are ordered by non-increasing yield (enforced at
//!   insertion) and carry validated demand statistics.
//! - Degenerate inputs never divide by zero: a zero pooled variance
//!   collapses the quantile to the pooled mean, and a price ratio ≥ 1 adds
//!   no protection beyond the previous boundary.
//!
//! Conventions
//! -----------
//! - Boundary j (0-based) separates classes 0..=j from class j+1 and is
//!   stored as class j's cumulated protection.
//! - The bid-price vector holds one entry per whole seat, indexed by
//!   capacity level 1..⌊capacity⌋.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the two-class closed form from the revenue-management
//!   literature (protection 50 at a price ratio of 1/2), the monotonicity
//!   clamp, the zero-variance and equal-yield fallbacks, the single-class
//!   case, and the bid-price step function.

use crate::inventory::{Cabin, FareClass};
use crate::optimization::errors::OptimResult;
use crate::optimization::validation::{validate_capacity, validate_class_count};
use ndarray::Array1;
use statrs::distribution::{ContinuousCDF, Normal};

/// Fill the cabin's protections by dynamic programming and return the
/// bid-price vector.
///
/// Parameters
/// ----------
/// - `cabin`: `&mut Cabin`
///   Ordered fare classes with demand statistics populated. Mutated in
///   place: cumulated protections, protections, booking limits, and the
///   revenue ledger are all written.
///
/// Returns
/// -------
/// `OptimResult<Array1<f64>>`
///   - `Ok(bid_prices)` — the marginal seat value per capacity level
///     1..⌊capacity⌋, a non-increasing step function.
///   - `Err(OptimError::InvalidCapacity)` when the capacity is not finite
///     and positive.
///   - `Err(OptimError::InsufficientClasses)` for an empty cabin. A single
///     class trivially protects 0 and gets the full capacity as its booking
///     limit.
///
/// Notes
/// -----
/// - Internally this computes the n−1 protection boundaries, writes them
///   into the classes, runs `Cabin::recalculate`, and derives the bid
///   prices with [`bid_price_vector`].
pub fn optimize_by_dp(cabin: &mut Cabin) -> OptimResult<Array1<f64>> {
    validate_capacity(cabin.capacity())?;
    validate_class_count(cabin.len())?;

    let boundaries = calc_boundaries(cabin.classes());
    apply_boundaries(cabin, &boundaries);
    cabin.recalculate();

    Ok(bid_price_vector(cabin))
}

/// Derive the bid-price step function from a cabin with filled cumulated
/// protections.
///
/// The bid price at capacity level x (one entry per whole seat,
/// x = 1..⌊capacity⌋) is the yield of the first class whose cumulated
/// protection reaches x; once every protection boundary lies below x the
/// marginal seat is worth the lowest yield. Non-increasing in x because the
/// cumulated protections are non-decreasing across non-increasing yields.
pub fn bid_price_vector(cabin: &Cabin) -> Array1<f64> {
    let levels = cabin.capacity().floor() as usize;
    let classes = cabin.classes();
    let lowest_yield = classes.last().map_or(0.0, FareClass::average_yield);

    let mut prices = Vec::with_capacity(levels);
    for x in 1..=levels {
        let level = x as f64;
        let price = classes
            .iter()
            .find(|class| class.cumulated_protection() >= level)
            .map_or(lowest_yield, FareClass::average_yield);
        prices.push(price);
    }
    Array1::from(prices)
}

/// Demand-weighted average yield of the pooled classes `0..=through`.
///
/// Falls back to the plain average when every pooled mean is 0, so the
/// indifference ratio stays defined for all validated inputs.
pub(crate) fn pooled_average_yield(classes: &[FareClass], through: usize) -> f64 {
    let pool = &classes[..=through];
    let mass: f64 = pool.iter().map(FareClass::mean).sum();
    if mass > 0.0 {
        pool.iter().map(|c| c.average_yield() * c.mean()).sum::<f64>() / mass
    } else {
        pool.iter().map(FareClass::average_yield).sum::<f64>() / pool.len() as f64
    }
}

/// Write n−1 boundaries to classes 0..n−2 and close out the lowest class.
///
/// The lowest class's cumulated protection becomes
/// `max(capacity, y_{n−1})`, making its protection the remaining capacity.
/// A single class instead protects 0 and keeps the full capacity as its
/// booking limit.
pub(crate) fn apply_boundaries(cabin: &mut Cabin, boundaries: &[f64]) {
    let count = cabin.len();
    let capacity = cabin.capacity();
    let classes = cabin.classes_mut();

    for (j, &boundary) in boundaries.iter().enumerate() {
        classes[j].set_cumulated_protection(boundary);
    }

    if count == 1 {
        classes[0].set_cumulated_protection(0.0);
    } else {
        let last_boundary = boundaries.last().copied().unwrap_or(0.0);
        classes[count - 1].set_cumulated_protection(capacity.max(last_boundary));
    }
}

/// Compute the n−1 protection boundaries by nested backward induction.
///
/// For each boundary j, classes 0..=j are pooled into
/// Normal(Σ means, √Σ variances) priced at their demand-weighted average
/// yield, and the boundary is the `1 − yieldⱼ₊₁ / ȳ_pool` quantile of the
/// pooled demand. Guards: a ratio ≥ 1 repeats the previous boundary, a zero
/// pooled variance collapses the quantile to the pooled mean, and every
/// boundary is clamped non-negative and non-decreasing.
fn calc_boundaries(classes: &[FareClass]) -> Vec<f64> {
    let count = classes.len();
    let mut boundaries = Vec::with_capacity(count.saturating_sub(1));

    let mut pooled_mean = 0.0;
    let mut pooled_variance = 0.0;
    let mut previous = 0.0;

    for j in 0..count.saturating_sub(1) {
        pooled_mean += classes[j].mean();
        pooled_variance += classes[j].variance();

        let ratio = classes[j + 1].average_yield() / pooled_average_yield(classes, j);
        let boundary = if ratio >= 1.0 {
            previous
        } else if pooled_variance <= 0.0 {
            pooled_mean
        } else {
            let pooled = Normal::new(pooled_mean, pooled_variance.sqrt())
                .expect("pooled mean is finite and pooled std dev is positive");
            pooled.inverse_cdf(1.0 - ratio)
        };

        let boundary = boundary.max(0.0).max(previous);
        boundaries.push(boundary);
        previous = boundary;
    }

    boundaries
}
