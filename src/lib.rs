//! TUDASH - Terminal User Dashboard Library
//!
//! A terminal-based user management dashboard, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
