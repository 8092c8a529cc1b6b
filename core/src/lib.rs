//! # SmileGate Core
//!
//! Core business logic and domain layer for the SmileGate backend.
//! This crate contains the verification product catalog, the token
//! issuance service, the upstream provider interface, and error types
//! that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{IssuedToken, Product, WebTokenRequest};
pub use errors::{DomainError, DomainResult, ProviderError, ValidationError};
pub use services::{TokenProvider, TokenService};
