//! # SmileGate Infrastructure
//!
//! Infrastructure layer for the SmileGate backend: the Smile ID web-token
//! client (request signing and transport) and a mock provider for
//! development and testing.

pub mod smile;

pub use smile::{MockSmileService, Signature, SmileWebApi};
