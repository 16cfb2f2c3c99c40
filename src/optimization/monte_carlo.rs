//! optimization::monte_carlo — protection levels by Monte Carlo integration.
//!
//! Purpose
//! -------
//! Estimate the same nested protection boundaries the dynamic-programming
//! optimizer computes in closed form, by drawing K demand realizations per
//! class and reading the indifference quantile off the empirical
//! distribution of the pooled demand.
//!
//! Key behaviors
//! -------------
//! - Maintain K partial-sum accumulators: after boundary j each accumulator
//!   holds one realization of `Sⱼ = D₁ + … + Dⱼ`, the pooled demand of
//!   classes 1..j. Negative Normal draws are clamped to 0 (demand cannot be
//!   negative); a zero-variance class contributes its mean
//!   deterministically.
//! - Boundary j is the empirical `1 − yieldⱼ₊₁ / ȳ_pool` quantile of the
//!   sorted accumulators, the sample-average counterpart of the DP formula;
//!   as K → ∞ the estimate converges to the DP boundary for Normal demand.
//! - Draw counts below [`RECOMMENDED_MIN_DRAWS`] degrade statistical
//!   stability but stay defined; the guard warns and proceeds.
//!
//! Invariants & assumptions
//! ------------------------
//! - The generator is caller-owned and explicitly seeded; the crate never
//!   touches process-global randomness, so runs are reproducible and
//!   concurrent optimizations do not interfere.
//! - Draws are statistically independent: a caller partitioning the K draws
//!   across generator streams with distinct seeds may merge the resulting
//!   boundary estimates by simple averaging.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the deterministic zero-variance path (exact
//!   boundaries, independent of K), the structural error branches, and a
//!   seeded two-class run inside a statistical tolerance band; the
//!   DP cross-validation with growing K lives in the integration tests.

use crate::inventory::Cabin;
use crate::optimization::dynamic_programming::{apply_boundaries, pooled_average_yield};
use crate::optimization::errors::OptimResult;
use crate::optimization::validation::{
    validate_capacity, validate_class_count, validate_draw_count,
};
use crate::stats;
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Normal;

use crate::optimization::validation::RECOMMENDED_MIN_DRAWS;

/// Fill the cabin's protections by Monte Carlo integration.
///
/// Parameters
/// ----------
/// - `cabin`: `&mut Cabin`
///   Ordered fare classes with demand statistics populated. Mutated in
///   place exactly as by [`crate::optimization::optimize_by_dp`]; derive
///   bid prices afterwards with
///   [`crate::optimization::bid_price_vector`].
/// - `draws`: `usize`
///   Number K of demand realizations; at least 1, recommended ≥
///   [`RECOMMENDED_MIN_DRAWS`].
/// - `rng`: `&mut R`
///   Caller-owned random generator, explicitly seeded for reproducibility.
///
/// Returns
/// -------
/// `OptimResult<()>`
///   - `Ok(())` on success.
///   - `Err(OptimError::InvalidCapacity | InsufficientClasses |
///     InvalidDrawCount)` on structural input errors, before any draw is
///     consumed.
pub fn optimize_by_mc<R: Rng + ?Sized>(
    cabin: &mut Cabin, draws: usize, rng: &mut R,
) -> OptimResult<()> {
    validate_capacity(cabin.capacity())?;
    validate_class_count(cabin.len())?;
    validate_draw_count(draws)?;

    let boundaries = estimate_boundaries(cabin, draws, rng);
    apply_boundaries(cabin, &boundaries);
    cabin.recalculate();

    Ok(())
}

/// Estimate the n−1 protection boundaries from K pooled-demand draws.
///
/// Accumulates one class per step into the partial sums, sorts a copy, and
/// reads the indifference quantile. The same clamping and monotonicity
/// rules as the DP boundary computation apply: a ratio ≥ 1 repeats the
/// previous boundary, and every estimate is clamped non-negative and
/// non-decreasing.
fn estimate_boundaries<R: Rng + ?Sized>(cabin: &Cabin, draws: usize, rng: &mut R) -> Vec<f64> {
    let classes = cabin.classes();
    let count = classes.len();

    let mut partial_sums = vec![0.0_f64; draws];
    let mut sorted = vec![0.0_f64; draws];
    let mut boundaries = Vec::with_capacity(count.saturating_sub(1));
    let mut previous = 0.0;

    for j in 0..count.saturating_sub(1) {
        let class = &classes[j];
        if class.standard_deviation() > 0.0 {
            let demand = Normal::new(class.mean(), class.standard_deviation())
                .expect("class mean is finite and std dev is positive");
            for sum in partial_sums.iter_mut() {
                // Demand cannot be negative: clamp the Normal tail at 0.
                *sum += demand.sample(rng).max(0.0);
            }
        } else if class.mean() > 0.0 {
            stats::add_value(&mut partial_sums, class.mean());
        }

        let ratio = classes[j + 1].average_yield() / pooled_average_yield(classes, j);
        let boundary = if ratio >= 1.0 {
            previous
        } else {
            sorted.copy_from_slice(&partial_sums);
            sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("demand draws are finite"));
            let index = ((1.0 - ratio) * (draws as f64 - 1.0)).round() as usize;
            sorted[index.min(draws - 1)]
        };

        let boundary = boundary.max(0.0).max(previous);
        boundaries.push(boundary);
        previous = boundary;
    }

    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::FareClass;
    use crate::optimization::errors::OptimError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The deterministic zero-variance path: boundaries equal to pooled
    //   means regardless of K.
    // - A seeded two-class run landing inside a statistical tolerance band
    //   around the known median boundary.
    // - Structural error branches and the outputs' structural invariants.
    //
    // They intentionally DO NOT cover:
    // - Convergence toward the DP optimizer with growing K; that
    //   cross-validation lives in tests/integration_seat_inventory.rs.
    // -------------------------------------------------------------------------

    fn cabin_from(class_inputs: &[(f64, f64, f64)], capacity: f64) -> Cabin {
        let mut cabin = Cabin::new(capacity);
        for &(yield_, mean, std) in class_inputs {
            cabin.add_class(FareClass::new(yield_, mean, std).unwrap()).unwrap();
        }
        cabin
    }

    #[test]
    // Purpose
    // -------
    // Verify the deterministic path: with zero-variance classes every
    // accumulator holds exactly the pooled mean, so the quantile is that
    // mean independent of K and seed.
    //
    // Given
    // -----
    // - Classes (100, 50, 0) and (50, 30, 0) at capacity 70, K = 128.
    //
    // Expect
    // ------
    // - Cumulated protection exactly 50 for class 1; booking limit 20 for
    //   class 2; no panic anywhere despite zero standard deviations.
    fn mc_zero_variance_classes_are_deterministic() {
        // Arrange
        let mut cabin = cabin_from(&[(100.0, 50.0, 0.0), (50.0, 30.0, 0.0)], 70.0);
        let mut rng = StdRng::seed_from_u64(7);

        // Act
        optimize_by_mc(&mut cabin, 128, &mut rng).unwrap();

        // Assert
        assert_eq!(cabin.classes()[0].cumulated_protection(), 50.0);
        assert_eq!(cabin.classes()[1].cumulated_booking_limit(), 20.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify a seeded stochastic run lands inside a tolerance band around
    // the known boundary: at a price ratio of 1/2 the target quantile is
    // the median of Normal(50, 10), i.e. 50.
    //
    // Given
    // -----
    // - Classes (100, 50, 10) and (50, 30, 5) at capacity 70, K = 20 000,
    //   fixed seed.
    //
    // Expect
    // ------
    // - Cumulated protection within ±2 of 50 (≈ 5 standard errors of the
    //   empirical median at this K) and the booking-limit identity intact.
    fn mc_seeded_two_class_run_is_near_the_median_boundary() {
        // Arrange
        let mut cabin = cabin_from(&[(100.0, 50.0, 10.0), (50.0, 30.0, 5.0)], 70.0);
        let mut rng = StdRng::seed_from_u64(42);

        // Act
        optimize_by_mc(&mut cabin, 20_000, &mut rng).unwrap();

        // Assert
        let protection = cabin.classes()[0].cumulated_protection();
        assert!(
            (protection - 50.0).abs() < 2.0,
            "empirical median boundary {protection} strayed from 50"
        );
        assert!(
            (cabin.classes()[1].cumulated_booking_limit()
                + cabin.classes()[0].cumulated_protection()
                - cabin.capacity())
            .abs()
                < 1e-9
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify monotone cumulated protections on a seeded three-class run.
    //
    // Given
    // -----
    // - Three classes with spread yields at capacity 120, K = 5 000.
    //
    // Expect
    // ------
    // - Cumulated protections non-decreasing across classes.
    fn mc_three_class_protections_are_monotone() {
        // Arrange
        let mut cabin = cabin_from(
            &[(200.0, 25.0, 8.0), (120.0, 40.0, 12.0), (60.0, 55.0, 15.0)],
            120.0,
        );
        let mut rng = StdRng::seed_from_u64(1234);

        // Act
        optimize_by_mc(&mut cabin, 5_000, &mut rng).unwrap();

        // Assert
        let mut previous = 0.0;
        for class in cabin.classes() {
            assert!(class.cumulated_protection() >= previous - 1e-9);
            previous = class.cumulated_protection();
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the structural error branches: zero draws, non-positive
    // capacity, and an empty cabin — each surfaced before any sampling.
    //
    // Given
    // -----
    // - A valid cabin with K = 0; a capacity-0 cabin; an empty cabin.
    //
    // Expect
    // ------
    // - `Err(InvalidDrawCount(0))`, `Err(InvalidCapacity(0.0))`, and
    //   `Err(InsufficientClasses(0))` respectively.
    fn mc_structural_errors_before_sampling() {
        // Arrange
        let mut valid = cabin_from(&[(100.0, 50.0, 10.0)], 70.0);
        let mut no_capacity = cabin_from(&[(100.0, 50.0, 10.0)], 0.0);
        let mut no_classes = Cabin::new(70.0);
        let mut rng = StdRng::seed_from_u64(0);

        // Act & Assert
        assert_eq!(
            optimize_by_mc(&mut valid, 0, &mut rng),
            Err(OptimError::InvalidDrawCount(0))
        );
        assert_eq!(
            optimize_by_mc(&mut no_capacity, 100, &mut rng),
            Err(OptimError::InvalidCapacity(0.0))
        );
        assert_eq!(
            optimize_by_mc(&mut no_classes, 100, &mut rng),
            Err(OptimError::InsufficientClasses(0))
        );
    }
}
