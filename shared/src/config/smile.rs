//! Smile ID partner configuration
//!
//! The four partner variables are snapshotted once at startup and validated
//! per request: a request that needs them gets either a complete
//! [`SmileConnection`] or the full list of missing variable names.

use serde::{Deserialize, Serialize};

use crate::config::environment::Environment;

/// Names of the required Smile ID environment variables.
pub const ENV_PARTNER_ID: &str = "SMILE_PARTNER_ID";
pub const ENV_CALLBACK_URL: &str = "CALLBACK_URL";
pub const ENV_API_KEY: &str = "SMILE_API_KEY";
pub const ENV_SID_SERVER: &str = "SID_SERVER";

/// Raw snapshot of the Smile ID environment variables.
///
/// Fields are `None` when the variable is unset or empty. The snapshot is
/// taken once at process start and is immutable afterwards; validation
/// happens per request via [`SmileEnv::require`].
#[derive(Debug, Clone, Default)]
pub struct SmileEnv {
    pub partner_id: Option<String>,
    pub callback_url: Option<String>,
    pub api_key: Option<String>,
    pub sid_server: Option<String>,
}

impl SmileEnv {
    /// Snapshot the Smile ID variables from the process environment.
    pub fn from_env() -> Self {
        Self {
            partner_id: read_non_empty(ENV_PARTNER_ID),
            callback_url: read_non_empty(ENV_CALLBACK_URL),
            api_key: read_non_empty(ENV_API_KEY),
            sid_server: read_non_empty(ENV_SID_SERVER),
        }
    }

    /// Validate the snapshot, returning connection parameters or the names
    /// of every missing variable (not just the first).
    pub fn require(&self) -> Result<SmileConnection, Vec<&'static str>> {
        let mut missing = Vec::new();
        if self.partner_id.is_none() {
            missing.push(ENV_PARTNER_ID);
        }
        if self.callback_url.is_none() {
            missing.push(ENV_CALLBACK_URL);
        }
        if self.api_key.is_none() {
            missing.push(ENV_API_KEY);
        }
        if self.sid_server.is_none() {
            missing.push(ENV_SID_SERVER);
        }
        if !missing.is_empty() {
            return Err(missing);
        }

        let sid_server = self.sid_server.clone().unwrap_or_default();
        Ok(SmileConnection {
            partner_id: self.partner_id.clone().unwrap_or_default(),
            callback_url: self.callback_url.clone().unwrap_or_default(),
            api_key: self.api_key.clone().unwrap_or_default(),
            environment: Environment::from_sid_server(&sid_server),
            sid_server,
        })
    }
}

/// Validated connection parameters for the Smile ID provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmileConnection {
    /// Registered partner identifier with the upstream provider.
    pub partner_id: String,
    /// URL the provider will deliver job results to.
    pub callback_url: String,
    /// Partner API key used for request signing.
    pub api_key: String,
    /// Raw server selector ("0" for sandbox, anything else for live).
    pub sid_server: String,
    /// Environment derived from the server selector.
    pub environment: Environment,
}

fn read_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
