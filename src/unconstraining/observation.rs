//! unconstraining::observation — one historical booking record.
//!
//! Purpose
//! -------
//! Represent a single departure's observed booking count together with its
//! censorship flag and the working demand estimate the
//! expectation-maximization loop refines in place.
//!
//! Key behaviors
//! -------------
//! - The observed count and censorship flag are immutable once constructed;
//!   only the unconstrained-demand estimate is rewritten between
//!   iterations.
//! - An uncensored record's estimate is pinned to its observed count on
//!   every pass, so callers need not pre-filter the history.
//!
//! Invariants & assumptions
//! ------------------------
//! - `booking_count` is finite and non-negative, enforced at construction.
//! - `unconstrained_demand` starts at `booking_count` and never drops below
//!   it for censored records; the E-step only moves it upward from the
//!   truncation point.

use std::fmt;

use crate::unconstraining::errors::{EmError, EmResult};

/// One departure's booking observation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalBooking {
    /// Seats actually sold for this departure.
    booking_count: f64,
    /// Whether the booking limit was reached, truncating observed demand.
    censored: bool,
    /// Working estimate of the latent demand, refined by each E-step.
    unconstrained_demand: f64,
}

impl HistoricalBooking {
    /// Validate and build a booking record.
    ///
    /// Parameters
    /// ----------
    /// - `booking_count`: `f64`
    ///   Observed bookings; must be finite and non-negative.
    /// - `censored`: `bool`
    ///   True when the class closed, so latent demand may exceed the count.
    ///
    /// Returns
    /// -------
    /// `EmResult<HistoricalBooking>`
    ///   - `Ok(record)` with the demand estimate seeded at the count.
    ///   - `Err(EmError::InvalidBookingCount)` for negative or non-finite
    ///     counts.
    pub fn new(booking_count: f64, censored: bool) -> EmResult<Self> {
        if !booking_count.is_finite() || booking_count < 0.0 {
            return Err(EmError::InvalidBookingCount(booking_count));
        }
        Ok(HistoricalBooking { booking_count, censored, unconstrained_demand: booking_count })
    }

    pub fn booking_count(&self) -> f64 {
        self.booking_count
    }

    pub fn censored(&self) -> bool {
        self.censored
    }

    /// Current demand estimate for this record.
    pub fn unconstrained_demand(&self) -> f64 {
        self.unconstrained_demand
    }

    pub(crate) fn set_unconstrained_demand(&mut self, demand: f64) {
        self.unconstrained_demand = demand;
    }
}

impl fmt::Display for HistoricalBooking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}; {};",
            self.booking_count,
            if self.censored { "censored" } else { "observed" },
            self.unconstrained_demand
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify construction seeds the demand estimate at the observed count
    // and keeps the censorship flag.
    //
    // Given
    // -----
    // - A censored record with 120 bookings.
    //
    // Expect
    // ------
    // - Count 120, censored true, unconstrained demand 120.
    fn new_seeds_demand_at_the_observed_count() {
        // Act
        let record = HistoricalBooking::new(120.0, true).unwrap();

        // Assert
        assert_eq!(record.booking_count(), 120.0);
        assert!(record.censored());
        assert_eq!(record.unconstrained_demand(), 120.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify negative and non-finite counts are rejected with the offending
    // value.
    //
    // Given
    // -----
    // - Counts -1.0 and NaN.
    //
    // Expect
    // ------
    // - `Err(EmError::InvalidBookingCount)` both times.
    fn new_rejects_invalid_counts() {
        // Act & Assert
        assert_eq!(
            HistoricalBooking::new(-1.0, false),
            Err(EmError::InvalidBookingCount(-1.0))
        );
        assert!(matches!(
            HistoricalBooking::new(f64::NAN, true),
            Err(EmError::InvalidBookingCount(_))
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify the display form lists count, censorship, and estimate in
    // order.
    //
    // Given
    // -----
    // - An uncensored record with 80 bookings.
    //
    // Expect
    // ------
    // - "80; observed; 80;".
    fn display_lists_the_record_fields() {
        // Arrange
        let record = HistoricalBooking::new(80.0, false).unwrap();

        // Act & Assert
        assert_eq!(record.to_string(), "80; observed; 80;");
    }
}
