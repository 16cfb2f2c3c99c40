//! Integration tests for the full seat-inventory pipeline.
//!
//! Purpose
//! -------
//! Exercise the crate end to end the way a revenue-management system
//! would: unconstrain a censored booking history, load the recovered
//! demand into a cabin, run both optimizers, and read protections,
//! booking limits, revenue, and bid prices off the result.
//!
//! Scope
//! -----
//! These tests cover:
//! - The two-class closed form and its bid-price step function.
//! - Monte Carlo convergence toward the closed form at large K, both for
//!   a stochastic cabin and exactly for a degenerate one.
//! - The ledger identities (nesting, booking-limit complement, revenue)
//!   on a four-class cabin under both optimizers.
//! - The unconstraining-to-optimization handoff.
//!
//! They intentionally DO NOT cover:
//! - Per-function edge cases and error taxonomies; those live in the
//!   unit tests next to each module.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_revenue::prelude::*;

fn cabin_from(class_inputs: &[(f64, f64, f64)], capacity: f64) -> Cabin {
    let mut cabin = Cabin::new(capacity);
    for &(yield_, mean, std) in class_inputs {
        cabin.add_class(FareClass::new(yield_, mean, std).unwrap()).unwrap();
    }
    cabin
}

fn assert_ledger_identities(cabin: &Cabin) {
    // Nesting: cumulated protections never decrease down the yield order.
    let mut previous = 0.0;
    for class in cabin.classes() {
        assert!(
            class.cumulated_protection() >= previous - 1e-9,
            "protection {} broke the nesting below {previous}",
            class.cumulated_protection()
        );
        previous = class.cumulated_protection();
    }
    // Complement: each booking limit plus the protection above it spans
    // the cabin.
    assert_eq!(cabin.classes()[0].cumulated_booking_limit(), cabin.capacity());
    for index in 1..cabin.len() {
        let limit = cabin.classes()[index].cumulated_booking_limit();
        let shielded = cabin.classes()[index - 1].cumulated_protection();
        assert!(
            (limit + shielded.min(cabin.capacity()) - cabin.capacity()).abs() < 1e-9,
            "booking limit {limit} and protection {shielded} do not span the cabin"
        );
    }
}

#[test]
// Purpose
// -------
// Verify the canonical two-class solution: at a price ratio of 1/2 the
// protection for the high class is the median of its Normal demand, and
// the bid-price vector steps from the high to the low price exactly at
// that protection.
//
// Given
// -----
// - Classes (100, 50, 10) and (50, 30, 5) at capacity 70.
//
// Expect
// ------
// - Cumulated protection 50, booking limit 20, optimal revenue
//   100·50 + 50·20 = 6000, demand factor 80/70, and a 70-entry bid-price
//   vector worth 100 through seat 50 and 50 afterwards.
fn dp_two_class_pipeline() {
    // Arrange
    let mut cabin = cabin_from(&[(100.0, 50.0, 10.0), (50.0, 30.0, 5.0)], 70.0);

    // Act
    let bid_prices = optimize_by_dp(&mut cabin).unwrap();

    // Assert
    assert!((cabin.classes()[0].cumulated_protection() - 50.0).abs() < 1e-6);
    assert!((cabin.classes()[1].cumulated_booking_limit() - 20.0).abs() < 1e-6);
    assert!((cabin.optimal_revenue() - 6000.0).abs() < 1e-3);
    assert!((cabin.demand_factor() - 80.0 / 70.0).abs() < 1e-12);
    assert_eq!(bid_prices.len(), 70);
    assert_eq!(bid_prices[0], 100.0);
    assert_eq!(bid_prices[49], 100.0);
    assert_eq!(bid_prices[50], 50.0);
    assert_eq!(bid_prices[69], 50.0);
    assert_ledger_identities(&cabin);
}

#[test]
// Purpose
// -------
// Verify Monte Carlo converges to the closed form at large K: the
// empirical quantile of the pooled Normal draws estimates the same
// boundary the inverse CDF computes.
//
// Given
// -----
// - The same two-class cabin, K = 100 000, fixed seed.
//
// Expect
// ------
// - Cumulated protection within ±1 of the closed form's 50.
fn mc_converges_to_the_closed_form() {
    // Arrange
    let mut cabin = cabin_from(&[(100.0, 50.0, 10.0), (50.0, 30.0, 5.0)], 70.0);
    let mut rng = StdRng::seed_from_u64(20_240_101);

    // Act
    optimize_by_mc(&mut cabin, 100_000, &mut rng).unwrap();

    // Assert
    let protection = cabin.classes()[0].cumulated_protection();
    assert!(
        (protection - 50.0).abs() < 1.0,
        "Monte Carlo protection {protection} strayed from the closed form"
    );
    assert_ledger_identities(&cabin);
}

#[test]
// Purpose
// -------
// Verify both optimizers agree exactly on a degenerate cabin: zero
// variance collapses the empirical quantile onto the pooled mean, so no
// statistical tolerance is needed.
//
// Given
// -----
// - Three zero-variance classes at capacity 150, run through both
//   optimizers with a small K.
//
// Expect
// ------
// - Identical cumulated protections and booking limits from both runs.
fn optimizers_agree_on_a_degenerate_cabin() {
    // Arrange
    let class_inputs = [(180.0, 30.0, 0.0), (110.0, 45.0, 0.0), (70.0, 60.0, 0.0)];
    let mut by_dp = cabin_from(&class_inputs, 150.0);
    let mut by_mc = cabin_from(&class_inputs, 150.0);
    let mut rng = StdRng::seed_from_u64(3);

    // Act
    optimize_by_dp(&mut by_dp).unwrap();
    optimize_by_mc(&mut by_mc, 256, &mut rng).unwrap();

    // Assert
    for (dp_class, mc_class) in by_dp.classes().iter().zip(by_mc.classes()) {
        assert_eq!(dp_class.cumulated_protection(), mc_class.cumulated_protection());
        assert_eq!(dp_class.cumulated_booking_limit(), mc_class.cumulated_booking_limit());
    }
}

#[test]
// Purpose
// -------
// Verify the ledger identities on a four-class cabin under both
// optimizers, and that a second optimizer run is idempotent.
//
// Given
// -----
// - Four classes with spread yields at capacity 200; DP run twice and a
//   seeded Monte Carlo run with K = 50 000.
//
// Expect
// ------
// - Nesting, complement, and revenue identities hold for both; repeated
//   DP runs leave the ledger unchanged; Monte Carlo protections sit
//   within ±1.5 of the closed form's.
fn four_class_ledger_identities_hold_for_both_optimizers() {
    // Arrange
    let class_inputs = [
        (250.0, 20.0, 6.0),
        (160.0, 35.0, 10.0),
        (100.0, 50.0, 14.0),
        (60.0, 70.0, 18.0),
    ];
    let mut by_dp = cabin_from(&class_inputs, 200.0);
    let mut by_mc = cabin_from(&class_inputs, 200.0);
    let mut rng = StdRng::seed_from_u64(99);

    // Act
    optimize_by_dp(&mut by_dp).unwrap();
    let first_limits = by_dp.booking_limits();
    optimize_by_dp(&mut by_dp).unwrap();
    optimize_by_mc(&mut by_mc, 50_000, &mut rng).unwrap();

    // Assert
    assert_ledger_identities(&by_dp);
    assert_ledger_identities(&by_mc);
    assert_eq!(first_limits, by_dp.booking_limits());
    let mut expected_revenue = 0.0;
    let mut shielded = 0.0;
    for class in by_dp.classes() {
        expected_revenue += class.average_yield() * (class.cumulated_protection() - shielded);
        shielded = class.cumulated_protection();
    }
    assert!((by_dp.optimal_revenue() - expected_revenue).abs() < 1e-9);
    assert!(by_dp.optimal_revenue() > 0.0);
    for (dp_class, mc_class) in by_dp.classes().iter().zip(by_mc.classes()) {
        assert!(
            (dp_class.cumulated_protection() - mc_class.cumulated_protection()).abs() < 1.5,
            "optimizers disagree: {} vs {}",
            dp_class.cumulated_protection(),
            mc_class.cumulated_protection()
        );
    }
}

#[test]
// Purpose
// -------
// Verify the unconstraining-to-optimization handoff: recover demand from
// a censored history, load it into a cabin's top class, and run the
// closed-form optimizer on the result.
//
// Given
// -----
// - A history whose three largest counts are censored at 60, seeded at
//   the raw sample statistics; a low class under the recovered one.
//
// Expect
// ------
// - A recovered mean above the raw sample mean, a converged loop, and a
//   positive protection for the recovered class.
fn unconstrained_demand_feeds_the_optimizer() {
    // Arrange
    let counts = [52.0, 55.0, 60.0, 60.0, 60.0, 48.0];
    let mut history: Vec<HistoricalBooking> = counts
        .iter()
        .map(|&count| HistoricalBooking::new(count, count >= 60.0).unwrap())
        .collect();
    let raw_mean = counts.iter().sum::<f64>() / counts.len() as f64;
    let criterion = StoppingCriterion::new(100, 1e-4).unwrap();

    // Act
    let demand = unconstrain(&mut history, raw_mean, 5.0, criterion).unwrap();
    let mut cabin = cabin_from(&[(140.0, 40.0, 12.0)], 130.0);
    cabin
        .add_class(FareClass::new(80.0, demand.mean, demand.standard_deviation).unwrap())
        .unwrap();
    optimize_by_dp(&mut cabin).unwrap();

    // Assert
    assert!(demand.mean > raw_mean, "completion did not add tail mass back");
    assert!(demand.converged);
    assert!(cabin.classes()[0].cumulated_protection() > 0.0);
    assert!(cabin.optimal_revenue() > 0.0);
    assert_ledger_identities(&cabin);
}
