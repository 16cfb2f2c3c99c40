//! inventory — fare classes and the cabin they share.
//!
//! Purpose
//! -------
//! Model the data the optimizers operate on: a [`FareClass`] carries one
//! class's average yield and Normal demand statistics plus the
//! optimizer-written controls (protection, cumulated protection, cumulated
//! booking limit); a [`Cabin`] owns the ordered class sequence, the resource
//! capacity, the forward cursor protocol, and the revenue ledger.
//!
//! Key behaviors
//! -------------
//! - Validate fare-class inputs at construction ([`FareClass::new`]) and the
//!   non-increasing-yield ordering at insertion ([`Cabin::add_class`]), so the
//!   optimizers never re-check them.
//! - Derive per-class protections and booking limits from cumulated
//!   protections, and the total-demand / demand-factor / optimal-revenue
//!   ledger, through idempotent single passes composed by
//!   [`Cabin::recalculate`].
//! - Express the original current / next / tagged iterator protocol as plain
//!   integer indices into the contiguous class sequence, avoiding live
//!   cursors into a mutable container.
//!
//! Invariants & assumptions
//! ------------------------
//! - Average yields are finite and positive; demand means and standard
//!   deviations are finite and non-negative (zero std-dev is a legitimate
//!   degenerate input).
//! - Adjacent classes satisfy `yieldᵢ ≥ yieldᵢ₊₁` from insertion onward.
//! - `next` is always one position ahead of `current`, or both sit at the
//!   end sentinel.
//!
//! Downstream usage
//! ----------------
//! - Build a cabin, hand it to [`crate::optimization::optimize_by_dp`] or
//!   [`crate::optimization::optimize_by_mc`], then read controls and the
//!   ledger back off the cabin.

pub mod cabin;
pub mod errors;
pub mod fare_class;

pub use cabin::Cabin;
pub use errors::{InventoryError, InventoryResult};
pub use fare_class::FareClass;
