//! Domain-error to HTTP response mapping.
//!
//! Validation and configuration errors carry their messages through to the
//! client. Provider errors do not: the upstream detail is logged here and
//! the client receives a fixed, detail-free message. Internal and upstream
//! error text never crosses the trust boundary.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use sg_core::errors::{DomainError, ValidationError};

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Convert a domain error into the HTTP response the client sees.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation(validation) => {
            log::warn!("validation error: {validation}");
            let code = match validation {
                ValidationError::InvalidProduct { .. } => "invalid_product",
                ValidationError::MissingUserId => "missing_user_id",
            };
            ErrorResponse::new(code, validation.to_string())
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Config { .. } => {
            log::error!("configuration error: {error}");
            ErrorResponse::new("configuration_error", error.to_string())
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DomainError::Provider(provider) => {
            // Full detail stays in the server log only.
            log::error!("error getting web token: {provider}");
            ErrorResponse::new("token_generation_failed", "Failed to generate token")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
