//! HTTP route handlers
//!
//! - token issuance (GET /api/v1/token)
//! - Smile ID result callback (POST /smile/callback)

pub mod callback;
pub mod token;

pub use token::AppState;
