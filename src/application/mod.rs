//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! owning the per-view state, the wizard controller, and the deadline timers
//! behind the simulated submission.

pub mod state;

pub use state::*;
