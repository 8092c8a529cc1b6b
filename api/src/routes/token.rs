//! Handler for GET /api/v1/token.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use sg_core::services::token::{TokenProvider, TokenService};

use crate::dto::token::TokenQuery;
use crate::handlers::error::domain_error_response;

/// Application state that holds shared services
pub struct AppState<P: TokenProvider> {
    pub token_service: Arc<TokenService<P>>,
}

/// Handler for GET /api/v1/token
///
/// Issues a Smile ID web session token.
///
/// # Query parameters
///
/// - `product` — one of the allowed product selectors
///   (default `biometric_kyc`)
/// - `user_id` — required for `authentication`; optional otherwise
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "...",
///     "partner_id": "2423",
///     "callback_url": "https://example.com/smile/callback",
///     "environment": "sandbox",
///     "product": "biometric_kyc",
///     "user_id": "user-...",
///     "job_id": "job-..."
/// }
/// ```
///
/// ## Errors
/// `400` for an unknown product or a missing `user_id` on authentication;
/// `500` for missing configuration or any upstream failure.
pub async fn get_token<P>(
    state: web::Data<AppState<P>>,
    query: web::Query<TokenQuery>,
) -> HttpResponse
where
    P: TokenProvider + 'static,
{
    log::info!(
        "Processing token request for product: {}, user_id supplied: {}",
        query.product,
        query.user_id.is_some()
    );

    match state.token_service.issue_token(&query.product, query.user_id.as_deref()).await {
        Ok(issued) => {
            log::info!(
                "Issued web token for product: {}, job_id: {}",
                issued.product,
                issued.job_id
            );
            HttpResponse::Ok().json(issued)
        }
        Err(error) => domain_error_response(&error),
    }
}
