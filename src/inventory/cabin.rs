//! inventory::cabin — the ordered fare-class collection and its ledger.
//!
//! Purpose
//! -------
//! Hold the ordered fare classes of one capacity-constrained resource
//! together with the aggregate bookkeeping the optimizers read and write:
//! capacity, total mean demand, demand factor, and optimal revenue. The
//! cabin also carries the forward cursor protocol (current / next / tagged)
//! that single-pass adjacent-element algorithms use.
//!
//! Key behaviors
//! -------------
//! - Enforce the ordering invariant (non-increasing average yield) at
//!   insertion time via [`Cabin::add_class`].
//! - Provide the cursor protocol as explicit integer indices: [`Cabin::begin`],
//!   [`Cabin::iterate`], [`Cabin::tag`], with `next == current + 1` unless
//!   both sit at the end sentinel.
//! - Derive per-class protections and cumulated booking limits from
//!   optimizer-written cumulated protections
//!   ([`Cabin::compute_protection_and_booking_limits`]), and the revenue
//!   ledger ([`Cabin::compute_mean_demand_and_optimal_revenue`]); both passes
//!   are idempotent and composed by [`Cabin::recalculate`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Class 0 is the highest-yield class; yields never increase along the
//!   sequence.
//! - `capacity` is strictly positive for any optimization run (the
//!   optimizers validate it); fractional capacities represent overbooking.
//! - The demand factor is left untouched when `capacity == 0`; the ledger
//!   never divides by zero.
//!
//! Conventions
//! -----------
//! - All cursor positions are indices into the class sequence; the end
//!   sentinel equals `len()`. "Tagging" saves a plain index.
//! - The `Display` rendering is a CSV table of classes followed by the
//!   aggregate footer, for diagnostics only.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover the cursor protocol boundary behavior, both
//!   ledger passes and their idempotence, the yield-ordering guard, and the
//!   empty-collection error.

use crate::inventory::errors::{InventoryError, InventoryResult};
use crate::inventory::fare_class::FareClass;
use ndarray::Array1;

/// `Cabin` — ordered fare classes plus capacity and the revenue ledger.
///
/// Purpose
/// -------
/// Own the fare classes of one resource in non-increasing yield order and
/// the aggregates derived from them. Optimizers fill each class's cumulated
/// protection, then [`Cabin::recalculate`] turns those into per-class
/// protections, booking limits, and the optimal revenue.
///
/// Fields
/// ------
/// - `capacity`: `f64`
///   Resource capacity; fractional values represent overbooking.
/// - `classes`: `Vec<FareClass>`
///   The ordered classes; class 0 carries the highest average yield.
/// - `current`, `next`: `usize`
///   Forward cursor pair; `next == current + 1` unless both equal the end
///   sentinel `classes.len()`.
/// - `tagged`: `Option<usize>`
///   Saved cursor position, written by [`Cabin::tag`].
/// - `total_mean_demand`, `demand_factor`, `optimal_revenue`: `f64`
///   The ledger, written by
///   [`Cabin::compute_mean_demand_and_optimal_revenue`].
///
/// Invariants
/// ----------
/// - `classes[i].average_yield() >= classes[i + 1].average_yield()` for all
///   adjacent pairs, enforced at insertion.
/// - `current <= next <= classes.len()` at all times.
#[derive(Debug, Clone)]
pub struct Cabin {
    capacity: f64,
    classes: Vec<FareClass>,
    current: usize,
    next: usize,
    tagged: Option<usize>,
    total_mean_demand: f64,
    demand_factor: f64,
    optimal_revenue: f64,
}

impl Cabin {
    /// Construct an empty cabin with the given capacity.
    ///
    /// The capacity is not validated here; the optimizers reject
    /// non-positive capacities with their own error type so that a cabin can
    /// be assembled incrementally before its capacity is known good.
    pub fn new(capacity: f64) -> Self {
        Cabin {
            capacity,
            classes: Vec::new(),
            current: 0,
            next: 0,
            tagged: None,
            total_mean_demand: 0.0,
            demand_factor: 0.0,
            optimal_revenue: 0.0,
        }
    }

    /// Append a fare class, enforcing the non-increasing-yield ordering.
    ///
    /// Parameters
    /// ----------
    /// - `class`: [`FareClass`]
    ///   The class to append; its average yield must not exceed the last
    ///   class's.
    ///
    /// Returns
    /// -------
    /// `InventoryResult<()>`
    ///   - `Ok(())` on success.
    ///   - `Err(InventoryError::YieldOrdering)` when the new class's yield
    ///     exceeds the previous class's; the cabin is left unchanged.
    pub fn add_class(&mut self, class: FareClass) -> InventoryResult<()> {
        if let Some(last) = self.classes.last() {
            if class.average_yield() > last.average_yield() {
                return Err(InventoryError::YieldOrdering {
                    index: self.classes.len(),
                    yield_: class.average_yield(),
                    previous: last.average_yield(),
                });
            }
        }
        self.classes.push(class);
        Ok(())
    }

    /// Resource capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of fare classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The ordered classes, highest yield first.
    pub fn classes(&self) -> &[FareClass] {
        &self.classes
    }

    /// Mutable access for the optimizers that fill cumulated protections.
    pub fn classes_mut(&mut self) -> &mut [FareClass] {
        &mut self.classes
    }

    /// Sum of all class demand means; written by the revenue pass.
    pub fn total_mean_demand(&self) -> f64 {
        self.total_mean_demand
    }

    /// Ratio of total mean demand to capacity; written by the revenue pass.
    pub fn demand_factor(&self) -> f64 {
        self.demand_factor
    }

    /// Σ yieldᵢ × protectionᵢ; written by the revenue pass.
    pub fn optimal_revenue(&self) -> f64 {
        self.optimal_revenue
    }

    // ---- Cursor protocol --------------------------------------------------

    /// Reset the cursor pair: `current` to the first class, `next` to the
    /// second (or the end sentinel with fewer than two classes).
    pub fn begin(&mut self) {
        self.current = 0;
        self.next = if self.classes.len() > 1 { 1 } else { self.classes.len() };
    }

    /// Advance both cursors by one position, each stopping at the end
    /// sentinel; a no-op once both sit there.
    pub fn iterate(&mut self) {
        if self.current < self.classes.len() {
            self.current += 1;
        }
        if self.next < self.classes.len() {
            self.next += 1;
        }
    }

    /// Whether the current cursor still addresses a class.
    pub fn has_not_reached_end(&self) -> bool {
        self.current < self.classes.len()
    }

    /// Remember the current cursor position for [`Cabin::tagged_class`].
    pub fn tag(&mut self) {
        self.tagged = Some(self.current);
    }

    /// The class at the current cursor, `None` at the end sentinel.
    pub fn current_class(&self) -> Option<&FareClass> {
        self.classes.get(self.current)
    }

    /// The class at the next cursor, `None` at the end sentinel.
    pub fn next_class(&self) -> Option<&FareClass> {
        self.classes.get(self.next)
    }

    /// The class saved by the last [`Cabin::tag`] call, `None` before any.
    pub fn tagged_class(&self) -> Option<&FareClass> {
        self.tagged.and_then(|idx| self.classes.get(idx))
    }

    /// Cumulated protection of the class preceding the current cursor.
    ///
    /// Returns 0 when the cursor sits on the first class, otherwise the
    /// cumulated protection of the class immediately before it.
    pub fn previous_cumulated_protection(&self) -> f64 {
        let idx = self.current.min(self.classes.len());
        if idx == 0 {
            0.0
        } else {
            self.classes[idx - 1].cumulated_protection()
        }
    }

    // ---- Ledger passes ----------------------------------------------------

    /// Derive per-class protections and cumulated booking limits from the
    /// cumulated protections an optimizer has written.
    ///
    /// Single forward pass over adjacent class pairs:
    /// - class 1: `cumulated_booking_limit = capacity` and
    ///   `protection = cumulated_protection₁`;
    /// - class j+1: `cumulated_booking_limit = capacity − cumulated_protectionⱼ`
    ///   and `protection = cumulated_protectionⱼ₊₁ − cumulated_protectionⱼ`.
    ///
    /// Idempotent: re-running with unchanged cumulated protections
    /// reproduces identical outputs. A no-op on an empty cabin.
    pub fn compute_protection_and_booking_limits(&mut self) {
        if self.classes.is_empty() {
            return;
        }

        let first = &mut self.classes[0];
        first.set_cumulated_booking_limit(self.capacity);
        first.set_protection(first.cumulated_protection());

        self.begin();
        while self.next < self.classes.len() {
            let previous_cumulated = self.classes[self.current].cumulated_protection();
            let next = &mut self.classes[self.next];
            next.set_cumulated_booking_limit(self.capacity - previous_cumulated);
            next.set_protection(next.cumulated_protection() - previous_cumulated);
            self.iterate();
        }
    }

    /// Recompute the ledger: total mean demand, optimal revenue, and the
    /// demand factor.
    ///
    /// Sums each class's mean into `total_mean_demand` and
    /// `yield × protection` into `optimal_revenue`. The demand factor is
    /// updated to `total_mean_demand / capacity` unless the capacity is 0,
    /// in which case it keeps its previous value.
    pub fn compute_mean_demand_and_optimal_revenue(&mut self) {
        self.total_mean_demand = 0.0;
        self.optimal_revenue = 0.0;

        for class in &self.classes {
            self.total_mean_demand += class.mean();
            self.optimal_revenue += class.average_yield() * class.protection();
        }

        if self.capacity != 0.0 {
            self.demand_factor = self.total_mean_demand / self.capacity;
        }
    }

    /// Re-derive booking limits, then the revenue ledger, in that order.
    pub fn recalculate(&mut self) {
        self.compute_protection_and_booking_limits();
        self.compute_mean_demand_and_optimal_revenue();
    }

    /// The minimum average yield over all classes.
    ///
    /// Returns
    /// -------
    /// `InventoryResult<f64>`
    ///   - `Ok(yield)` — the lowest class's yield (the classes are ordered,
    ///     but the scan does not rely on it).
    ///   - `Err(InventoryError::EmptyCollection)` with zero classes.
    pub fn lowest_average_yield(&self) -> InventoryResult<f64> {
        self.classes
            .iter()
            .map(FareClass::average_yield)
            .fold(None, |acc: Option<f64>, y| Some(acc.map_or(y, |a| a.min(y))))
            .ok_or(InventoryError::EmptyCollection)
    }

    /// The per-class cumulated booking limits, in class order.
    pub fn booking_limits(&self) -> Array1<f64> {
        self.classes.iter().map(FareClass::cumulated_booking_limit).collect()
    }
}

impl std::fmt::Display for Cabin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Class; Price; Mean; Std Dev; Protection; Cum. Protection; Cum. Bkg Limit;"
        )?;
        for (j, class) in self.classes.iter().enumerate() {
            writeln!(f, "{}; {}", j + 1, class)?;
        }
        writeln!(
            f,
            "Capacity = {}; Total Mean Demand = {}; Demand Factor = {}; Optimal Revenue = {}",
            self.capacity, self.total_mean_demand, self.demand_factor, self.optimal_revenue
        )
    }
}
