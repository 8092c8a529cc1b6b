//! Upstream provider interface for token issuance.

use async_trait::async_trait;
use sg_shared::config::SmileConnection;

use crate::domain::token::WebTokenRequest;
use crate::errors::ProviderError;

/// Trait for the upstream web-token provider.
///
/// One capability: issue a web session token for a (user_id, job_id,
/// product) triple under the given connection parameters. Implementations
/// own the wire protocol (signing, transport) and must normalize the
/// upstream response into a single token string.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn issue_web_token(
        &self,
        connection: &SmileConnection,
        request: &WebTokenRequest,
    ) -> Result<String, ProviderError>;
}
