//! Data transfer objects for the HTTP surface.

pub mod error;
pub mod token;

pub use error::{ErrorResponse, ErrorResponseExt};
pub use token::TokenQuery;
