//! Smile ID provider module
//!
//! Implementations of the core [`TokenProvider`](sg_core::services::token::TokenProvider)
//! seam:
//!
//! - **`SmileWebApi`**: production client that signs and POSTs token
//!   requests to the Smile ID API
//! - **`MockSmileService`**: in-process mock for development and tests
//!
//! Request signing lives in its own module so it can be exercised without
//! a network.

pub mod mock;
pub mod signature;
pub mod web_api;

// Re-export commonly used types
pub use mock::MockSmileService;
pub use signature::Signature;
pub use web_api::SmileWebApi;
