//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP client for the users listing endpoint,
//! the only outbound integration the dashboard has.

pub mod users_api;

pub use users_api::*;
