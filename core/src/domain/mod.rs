//! Domain types for identity-verification token issuance.

pub mod product;
pub mod token;

pub use product::Product;
pub use token::{IssuedToken, WebTokenRequest};
