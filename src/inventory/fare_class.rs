//! inventory::fare_class — a single nested fare class.
//!
//! Purpose
//! -------
//! Represent one fare class of the cabin: its average yield and Normal demand
//! statistics as validated inputs, and the protection level, cumulated
//! protection, and cumulated booking limit as optimizer-written outputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - `average_yield` is finite and strictly positive.
//! - `mean` and `standard_deviation` are finite and non-negative. A zero
//!   standard deviation is legal (a class with no recorded variance); every
//!   consumer guards the degenerate case.
//! - The computed fields start at 0 and are meaningful only after an
//!   optimizer has filled them.
//!
//! Conventions
//! -----------
//! - The `Display` rendering matches the cabin's CSV table:
//!   `yield; mean; std dev; protection; cum. protection; cum. bkg limit;`.

use crate::inventory::errors::{InventoryError, InventoryResult};

/// `FareClass` — validated demand inputs plus optimizer-written controls.
///
/// Purpose
/// -------
/// Hold the per-class inputs of the seat-inventory problem (average yield,
/// Normal demand mean and standard deviation) and receive the per-class
/// outputs (protection, cumulated protection, cumulated booking limit) from
/// the optimizers.
///
/// Fields
/// ------
/// - `average_yield`: `f64`
///   Revenue per accepted unit; finite and > 0.
/// - `mean`: `f64`
///   Expected demand; finite and ≥ 0.
/// - `standard_deviation`: `f64`
///   Demand standard deviation; finite and ≥ 0.
/// - `protection`: `f64`
///   Seats reserved exclusively for this class and better; written by the
///   cabin's booking-limit pass.
/// - `cumulated_protection`: `f64`
///   Seats reserved for this class and all higher-yield classes; written by
///   an optimizer.
/// - `cumulated_booking_limit`: `f64`
///   Capacity minus the cumulated protection of strictly higher classes;
///   written by the cabin's booking-limit pass.
///
/// Invariants
/// ----------
/// - The three input fields satisfy the constraints above from construction
///   onward; the computed fields carry whatever the last optimizer run wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct FareClass {
    average_yield: f64,
    mean: f64,
    standard_deviation: f64,
    protection: f64,
    cumulated_protection: f64,
    cumulated_booking_limit: f64,
}

impl FareClass {
    /// Construct a validated fare class from its demand inputs.
    ///
    /// Parameters
    /// ----------
    /// - `average_yield`: `f64`
    ///   Revenue per accepted unit; must be finite and strictly positive.
    /// - `mean`: `f64`
    ///   Expected demand; must be finite and non-negative.
    /// - `standard_deviation`: `f64`
    ///   Demand standard deviation; must be finite and non-negative (zero is
    ///   legal).
    ///
    /// Returns
    /// -------
    /// `InventoryResult<FareClass>`
    ///   - `Ok(class)` with all computed fields initialized to 0.
    ///   - `Err(InventoryError::InvalidYield | InvalidMean |
    ///     InvalidStandardDeviation)` when an input violates its constraint.
    pub fn new(average_yield: f64, mean: f64, standard_deviation: f64) -> InventoryResult<Self> {
        if !average_yield.is_finite() || average_yield <= 0.0 {
            return Err(InventoryError::InvalidYield(average_yield));
        }
        if !mean.is_finite() || mean < 0.0 {
            return Err(InventoryError::InvalidMean(mean));
        }
        if !standard_deviation.is_finite() || standard_deviation < 0.0 {
            return Err(InventoryError::InvalidStandardDeviation(standard_deviation));
        }
        Ok(FareClass {
            average_yield,
            mean,
            standard_deviation,
            protection: 0.0,
            cumulated_protection: 0.0,
            cumulated_booking_limit: 0.0,
        })
    }

    /// Revenue per accepted unit.
    pub fn average_yield(&self) -> f64 {
        self.average_yield
    }

    /// Expected demand.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Demand standard deviation.
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// Demand variance, `standard_deviation²`.
    pub fn variance(&self) -> f64 {
        self.standard_deviation * self.standard_deviation
    }

    /// Seats reserved exclusively for this class and better.
    pub fn protection(&self) -> f64 {
        self.protection
    }

    pub fn set_protection(&mut self, protection: f64) {
        self.protection = protection;
    }

    /// Seats reserved for this class and all higher-yield classes.
    pub fn cumulated_protection(&self) -> f64 {
        self.cumulated_protection
    }

    pub fn set_cumulated_protection(&mut self, cumulated_protection: f64) {
        self.cumulated_protection = cumulated_protection;
    }

    /// Capacity minus the cumulated protection of strictly higher classes.
    pub fn cumulated_booking_limit(&self) -> f64 {
        self.cumulated_booking_limit
    }

    pub fn set_cumulated_booking_limit(&mut self, cumulated_booking_limit: f64) {
        self.cumulated_booking_limit = cumulated_booking_limit;
    }
}

impl std::fmt::Display for FareClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; {}; {}; {}; {}; {};",
            self.average_yield,
            self.mean,
            self.standard_deviation,
            self.protection,
            self.cumulated_protection,
            self.cumulated_booking_limit
        )
    }
}
