//! Smile ID web-token client
//!
//! Production implementation of the [`TokenProvider`] seam. Signs each
//! request and POSTs it to the Smile ID token endpoint for the environment
//! selected by `SID_SERVER`. The upstream answers with either a bare JSON
//! string or an object carrying a `token` key; both shapes are normalized
//! into a single token string here, at the boundary.

use async_trait::async_trait;
use serde_json::{json, Value};
use sg_core::domain::token::WebTokenRequest;
use sg_core::errors::ProviderError;
use sg_core::services::token::TokenProvider;
use sg_shared::config::SmileConnection;
use tracing::{debug, info};

use super::signature::Signature;

const SANDBOX_BASE_URL: &str = "https://testapi.smileidentity.com/v1";
const LIVE_BASE_URL: &str = "https://api.smileidentity.com/v1";

const SOURCE_SDK: &str = "smile-gate";

/// Smile ID API client.
///
/// Connection parameters arrive per call; the client itself only owns the
/// HTTP transport, so one instance serves every request concurrently.
#[derive(Debug, Clone, Default)]
pub struct SmileWebApi {
    http: reqwest::Client,
}

impl SmileWebApi {
    pub fn new() -> Self {
        Self { http: reqwest::Client::new() }
    }

    /// Resolve the API base URL from the `SID_SERVER` selector.
    ///
    /// `"0"` selects the sandbox, any other bare value selects live, and a
    /// value containing `://` is used verbatim (SDK-compatible escape hatch
    /// for pointing at a stub server).
    fn base_url(sid_server: &str) -> String {
        if sid_server.contains("://") {
            sid_server.trim_end_matches('/').to_string()
        } else if sid_server == "0" {
            SANDBOX_BASE_URL.to_string()
        } else {
            LIVE_BASE_URL.to_string()
        }
    }

    /// Normalize the dual-shape upstream response into the token string.
    fn parse_token_value(value: &Value) -> Result<String, ProviderError> {
        match value {
            Value::String(token) => Ok(token.clone()),
            Value::Object(fields) => fields
                .get("token")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    ProviderError::MalformedResponse(
                        "response object has no string 'token' field".to_string(),
                    )
                }),
            other => Err(ProviderError::MalformedResponse(format!(
                "expected a token string or object, got: {other}"
            ))),
        }
    }
}

#[async_trait]
impl TokenProvider for SmileWebApi {
    async fn issue_web_token(
        &self,
        connection: &SmileConnection,
        request: &WebTokenRequest,
    ) -> Result<String, ProviderError> {
        let signer = Signature::new(&connection.partner_id, &connection.api_key);
        let (timestamp, signature) = signer.generate_now();

        let url = format!("{}/token", Self::base_url(&connection.sid_server));
        let body = json!({
            "user_id": request.user_id,
            "job_id": request.job_id,
            "product": request.product,
            "callback_url": connection.callback_url,
            "partner_id": connection.partner_id,
            "timestamp": timestamp,
            "signature": signature,
            "source_sdk": SOURCE_SDK,
            "source_sdk_version": env!("CARGO_PKG_VERSION"),
        });

        debug!(%url, job_id = %request.job_id, "posting web token request");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Rejected { status: status.as_u16(), body: text });
        }

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON: {e}")))?;
        let token = Self::parse_token_value(&value)?;

        info!(job_id = %request.job_id, environment = %connection.environment, "web token issued");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_selector_targets_the_test_api() {
        assert_eq!(SmileWebApi::base_url("0"), SANDBOX_BASE_URL);
    }

    #[test]
    fn other_selectors_target_the_live_api() {
        assert_eq!(SmileWebApi::base_url("1"), LIVE_BASE_URL);
        assert_eq!(SmileWebApi::base_url("production"), LIVE_BASE_URL);
    }

    #[test]
    fn explicit_urls_are_used_verbatim() {
        assert_eq!(
            SmileWebApi::base_url("http://localhost:9900/v1/"),
            "http://localhost:9900/v1"
        );
    }

    #[test]
    fn bare_string_response_is_accepted() {
        let value = json!("tok-123");
        assert_eq!(SmileWebApi::parse_token_value(&value).unwrap(), "tok-123");
    }

    #[test]
    fn object_response_with_token_key_is_accepted() {
        let value = json!({ "token": "tok-456", "success": true });
        assert_eq!(SmileWebApi::parse_token_value(&value).unwrap(), "tok-456");
    }

    #[test]
    fn object_response_without_token_key_is_malformed() {
        let value = json!({ "success": true });
        let err = SmileWebApi::parse_token_value(&value).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn non_string_token_field_is_malformed() {
        let value = json!({ "token": 42 });
        let err = SmileWebApi::parse_token_value(&value).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn array_response_is_malformed() {
        let value = json!(["tok-123"]);
        let err = SmileWebApi::parse_token_value(&value).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }
}
