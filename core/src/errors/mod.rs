//! Domain-specific error types and error handling.
//!
//! Provider errors carry the full upstream detail for server-side logging;
//! the presentation layer is responsible for hiding that detail from
//! clients.

use thiserror::Error;

use crate::domain::product::ALLOWED_PRODUCTS;

/// Request validation errors. Always a client error, never a side effect.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid product '{product}'. Allowed: {}", ALLOWED_PRODUCTS.join(", "))]
    InvalidProduct { product: String },

    #[error(
        "user_id is required for authentication and must refer to a previously enrolled user."
    )]
    MissingUserId,
}

/// Errors from the upstream token provider.
///
/// These never cross the trust boundary to the client verbatim.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced an upstream response.
    #[error("token request transport failure: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("upstream rejected token request: status {status}, body: {body}")]
    Rejected { status: u16, body: String },

    /// The upstream answered with a body the client could not interpret.
    #[error("malformed token response: {0}")]
    MalformedResponse(String),
}

/// Core domain errors for the token issuance flow.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Required environment variables were absent. Every missing name is
    /// listed, not just the first.
    #[error("Missing env vars: {}", .missing.join(", "))]
    Config { missing: Vec<&'static str> },

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_product_message_lists_allowed_set() {
        let err = ValidationError::InvalidProduct { product: "selfie".to_string() };
        let message = err.to_string();
        assert!(message.starts_with("Invalid product 'selfie'."));
        assert!(message.contains("authentication"));
        assert!(message.contains("smartselfie"));
    }

    #[test]
    fn config_error_names_every_missing_variable() {
        let err = DomainError::Config { missing: vec!["SMILE_PARTNER_ID", "SID_SERVER"] };
        assert_eq!(err.to_string(), "Missing env vars: SMILE_PARTNER_ID, SID_SERVER");
    }

    #[test]
    fn provider_errors_convert_into_domain_errors() {
        let err: DomainError = ProviderError::Transport("connection refused".to_string()).into();
        assert!(matches!(err, DomainError::Provider(_)));
    }
}
