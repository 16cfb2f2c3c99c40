//! rust_revenue — seat-inventory controls for nested fare classes.
//!
//! Purpose
//! -------
//! Compute optimal seat-inventory controls for a single capacity-constrained
//! resource (an aircraft cabin, a train coach) shared by several nested fare
//! classes. Given each class's average yield and forecast demand distribution
//! plus the resource capacity, the crate produces per-class protection levels,
//! cumulated booking limits, a bid-price vector, and the expected optimal
//! revenue. It also reconstructs unconstrained ("true") demand from
//! historically censored booking observations.
//!
//! Key behaviors
//! -------------
//! - Model a cabin as an ordered collection of fare classes (highest yield
//!   first) with a forward cursor protocol and revenue bookkeeping
//!   ([`inventory`]).
//! - Fill cumulated protection levels either in closed form by nested
//!   backward induction ([`optimization::optimize_by_dp`]) or by Monte Carlo
//!   integration over sampled demand
//!   ([`optimization::optimize_by_mc`]); both mutate the cabin in
//!   place and agree in the K → ∞ limit for Normal demand.
//! - Unconstrain censored historical bookings with an
//!   Expectation-Maximization loop over truncated-normal conditional
//!   expectations ([`unconstraining::unconstrain`]).
//! - Expose the small statistics helpers (minimum, mean, sample standard
//!   deviation, vector arithmetic) shared by all algorithms ([`stats`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Fare classes are ordered by non-increasing average yield; the ordering
//!   is enforced at insertion time and every optimizer relies on it.
//! - Capacity is a strictly positive `f64`; fractional values are legal and
//!   represent overbooking.
//! - Demand per class is modeled as Normal(mean, std-dev) with independent
//!   classes; a zero standard deviation is a legitimate degenerate input and
//!   never causes a division by zero anywhere in the crate.
//! - All mutation is confined to the caller's [`inventory::Cabin`] or
//!   [`unconstraining::HistoricalBooking`] slice. The only stochastic
//!   component, the Monte Carlo optimizer, draws from a caller-owned,
//!   explicitly seeded `rand` generator; there is no process-global state.
//!
//! Conventions
//! -----------
//! - Class indexing is 0-based in code; class 0 is the highest-yield class
//!   (the literature's "class 1").
//! - Structural input errors (non-positive capacity, zero classes, zero
//!   draws, empty vectors) surface as per-subtree error enums via `Result`;
//!   numeric degeneracies (zero variance, saturated normal tails) use
//!   documented fallback values instead of errors.
//! - The crate performs no I/O and no logging, except a single `log::warn!`
//!   when the Monte Carlo draw count falls below its recommended floor;
//!   callers orchestrate logging.
//!
//! Downstream usage
//! ----------------
//! - Typical flow: build a [`inventory::Cabin`] from fare-class data, hand it
//!   to exactly one optimizer, then read protections, booking limits, bid
//!   prices, and the optimal revenue back off the cabin.
//! - Independently, feed historical booking records through
//!   [`unconstraining::unconstrain`] and use the cleaned (mean, std-dev) as a
//!   fare class's demand inputs for a later optimization run.
//! - The [`prelude`] re-exports the everyday surface in one line.
//!
//! Testing notes
//! -------------
//! - Each module carries unit tests for its own guarantees (cursor protocol,
//!   ledger identities, closed-form boundaries, EM steps).
//! - `tests/integration_seat_inventory.rs` exercises the end-to-end pipeline,
//!   including the DP/Monte-Carlo cross-validation band.

pub mod inventory;
pub mod optimization;
pub mod stats;
pub mod unconstraining;

// ---- Convenience prelude for downstream crates ----------------------------
//
// Downstream crates can write
//
//     use rust_revenue::prelude::*;
//
// to import the main surface in a single line.

pub mod prelude {
    pub use crate::inventory::{Cabin, FareClass, InventoryError, InventoryResult};
    pub use crate::optimization::{
        bid_price_vector, optimize_by_dp, optimize_by_mc, OptimError, OptimResult,
        RECOMMENDED_MIN_DRAWS,
    };
    pub use crate::stats::{StatsError, StatsResult};
    pub use crate::unconstraining::{
        unconstrain, EmError, EmResult, HistoricalBooking, StoppingCriterion,
        UnconstrainedDemand,
    };
}
