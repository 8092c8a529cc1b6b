//! Token issuance service implementation.

use std::sync::Arc;

use sg_shared::config::SmileEnv;
use uuid::Uuid;

use crate::domain::product::Product;
use crate::domain::token::{IssuedToken, WebTokenRequest};
use crate::errors::{DomainError, DomainResult, ValidationError};

use super::traits::TokenProvider;

/// Service for issuing web session tokens through the upstream provider.
///
/// Holds the environment snapshot taken at startup and the provider
/// implementation. Requests share nothing else; two identical calls still
/// produce distinct job identifiers and independent upstream calls.
pub struct TokenService<P: TokenProvider> {
    /// Upstream token provider
    provider: Arc<P>,
    /// Startup snapshot of the Smile ID environment variables
    env: SmileEnv,
}

impl<P: TokenProvider> TokenService<P> {
    /// Create a new token service.
    pub fn new(provider: Arc<P>, env: SmileEnv) -> Self {
        Self { provider, env }
    }

    /// Issue a web session token.
    ///
    /// `product` is the raw query-string selector (unknown values are a
    /// validation error). An empty `user_id` is treated as absent.
    pub async fn issue_token(
        &self,
        product: &str,
        user_id: Option<&str>,
    ) -> DomainResult<IssuedToken> {
        let product = Product::parse(product)?;

        // Validated per request; every missing variable is reported at once.
        let connection =
            self.env.require().map_err(|missing| DomainError::Config { missing })?;

        // Only the empty string counts as absent; anything else is used
        // verbatim, whitespace included.
        let user_id = user_id.filter(|id| !id.is_empty());
        let user_id = if product.requires_enrolled_user() {
            // Authentication must reuse an already enrolled user_id
            // (a reference selfie exists for it).
            user_id.ok_or(ValidationError::MissingUserId)?.to_string()
        } else {
            user_id
                .map(str::to_string)
                .unwrap_or_else(|| format!("user-{}", Uuid::new_v4()))
        };

        let job_id = format!("job-{}", Uuid::new_v4());
        let request = WebTokenRequest { user_id, job_id, product };

        tracing::debug!(
            product = %request.product,
            user_id = %request.user_id,
            job_id = %request.job_id,
            environment = %connection.environment,
            "requesting web token"
        );

        let token = self.provider.issue_web_token(&connection, &request).await?;

        Ok(IssuedToken {
            token,
            partner_id: connection.partner_id,
            callback_url: connection.callback_url,
            environment: connection.environment,
            product: request.product,
            user_id: request.user_id,
            job_id: request.job_id,
        })
    }
}
