//! # SmileGate Shared
//!
//! Configuration and wire types shared across the SmileGate backend crates.

pub mod config;
pub mod types;

pub use config::*;
pub use types::ErrorResponse;
