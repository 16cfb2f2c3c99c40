//! optimization — seat-protection optimizers and bid-price extraction.
//!
//! Purpose
//! -------
//! Turn a [`crate::inventory::Cabin`] with per-class demand statistics into
//! nested protection levels, booking limits, and a bid-price vector. Two
//! optimizers share the same boundary semantics:
//!
//! - [`optimize_by_dp`] evaluates the indifference quantile of the pooled
//!   Normal demand in closed form.
//! - [`optimize_by_mc`] estimates the same quantile from K demand draws and
//!   converges to the closed form as K grows.
//!
//! Key behaviors
//! -------------
//! - Both optimizers validate capacity, class count, and (for Monte Carlo)
//!   draw count before touching the cabin, then write boundaries and run
//!   the cabin's recalculation pass.
//! - [`bid_price_vector`] reads the marginal value of each whole seat off a
//!   cabin whose protections have been filled by either optimizer.
//!
//! Downstream usage
//! ----------------
//! Re-exported through [`crate::prelude`]; the optimizers are the crate's
//! main entry points after cabin construction.

pub mod dynamic_programming;
pub mod errors;
pub mod monte_carlo;
pub mod validation;

pub use dynamic_programming::{bid_price_vector, optimize_by_dp};
pub use errors::{OptimError, OptimResult};
pub use monte_carlo::optimize_by_mc;
pub use validation::RECOMMENDED_MIN_DRAWS;
