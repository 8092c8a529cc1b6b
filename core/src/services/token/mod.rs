//! Token issuance service module
//!
//! This module handles web session token issuance:
//! - product and user identifier validation
//! - per-request environment validation
//! - session/job identifier derivation
//! - dispatch to the upstream provider behind [`TokenProvider`]

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::TokenService;
pub use traits::TokenProvider;
