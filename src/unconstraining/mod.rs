//! unconstraining — latent demand recovery from censored booking data.
//!
//! Purpose
//! -------
//! Booking histories understate demand whenever a class closed before
//! departure: the observed count is a truncation of what actually showed
//! up. This module recovers the latent Normal demand distribution by
//! expectation-maximization, so the optimizers downstream see demand
//! rather than sales.
//!
//! Key behaviors
//! -------------
//! - [`HistoricalBooking`] pairs each departure's count with a censorship
//!   flag and carries the working demand estimate between iterations.
//! - [`unconstrain`] alternates completion of censored records (truncated
//!   Normal conditional expectation) with refitting the sample statistics,
//!   under a [`StoppingCriterion`] of mean movement or an iteration cap.
//!
//! Downstream usage
//! ----------------
//! The recovered [`UnconstrainedDemand`] feeds directly into
//! [`crate::inventory::FareClass::new`] as that class's mean and standard
//! deviation.

pub mod em;
pub mod errors;
pub mod observation;

pub use em::{unconstrain, StoppingCriterion, UnconstrainedDemand};
pub use errors::{EmError, EmResult};
pub use observation::HistoricalBooking;
