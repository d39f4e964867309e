//! EventHub notification sync client — library crate.
//!
//! Re-exports the modules needed by integration tests in `tests/`.

pub mod center;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod sink;
