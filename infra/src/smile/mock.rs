//! Mock Smile ID provider
//!
//! An in-process implementation of the provider seam for development and
//! testing: fabricates tokens instead of calling the network, counts issued
//! tokens, and can simulate upstream failure.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sg_core::domain::token::WebTokenRequest;
use sg_core::errors::ProviderError;
use sg_core::services::token::TokenProvider;
use sg_shared::config::SmileConnection;
use tracing::{info, warn};
use uuid::Uuid;

/// Mock provider for development and testing.
#[derive(Clone, Default)]
pub struct MockSmileService {
    /// Counter for tokens issued so far
    token_count: Arc<AtomicU64>,
    /// Whether to simulate upstream failure (for testing)
    simulate_failure: bool,
}

impl MockSmileService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every call, for error-path testing.
    pub fn failing() -> Self {
        Self { token_count: Arc::new(AtomicU64::new(0)), simulate_failure: true }
    }

    /// Total number of tokens issued by this instance.
    pub fn token_count(&self) -> u64 {
        self.token_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for MockSmileService {
    async fn issue_web_token(
        &self,
        connection: &SmileConnection,
        request: &WebTokenRequest,
    ) -> Result<String, ProviderError> {
        if self.simulate_failure {
            warn!(job_id = %request.job_id, "mock provider simulating upstream failure");
            return Err(ProviderError::Rejected {
                status: 503,
                body: "simulated upstream outage".to_string(),
            });
        }

        let count = self.token_count.fetch_add(1, Ordering::SeqCst) + 1;
        let token = format!("mock-web-token-{}", Uuid::new_v4());

        info!(
            count,
            partner_id = %connection.partner_id,
            product = %request.product,
            user_id = %request.user_id,
            job_id = %request.job_id,
            "mock provider issued web token"
        );

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::domain::product::Product;
    use sg_shared::config::Environment;

    fn connection() -> SmileConnection {
        SmileConnection {
            partner_id: "2423".to_string(),
            callback_url: "https://example.com/smile/callback".to_string(),
            api_key: "test-api-key".to_string(),
            sid_server: "0".to_string(),
            environment: Environment::Sandbox,
        }
    }

    fn request() -> WebTokenRequest {
        WebTokenRequest {
            user_id: "user-1".to_string(),
            job_id: "job-1".to_string(),
            product: Product::SmartSelfie,
        }
    }

    #[tokio::test]
    async fn issues_unique_tokens_and_counts_them() {
        let mock = MockSmileService::new();

        let first = mock.issue_web_token(&connection(), &request()).await.unwrap();
        let second = mock.issue_web_token(&connection(), &request()).await.unwrap();

        assert!(first.starts_with("mock-web-token-"));
        assert_ne!(first, second);
        assert_eq!(mock.token_count(), 2);
    }

    #[tokio::test]
    async fn failing_mock_rejects_every_call() {
        let mock = MockSmileService::failing();

        let err = mock.issue_web_token(&connection(), &request()).await.unwrap_err();

        assert!(matches!(err, ProviderError::Rejected { status: 503, .. }));
        assert_eq!(mock.token_count(), 0);
    }
}
