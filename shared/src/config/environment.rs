//! Smile ID environment selection
//!
//! The upstream provider exposes two environments, selected by the
//! `SID_SERVER` variable: `"0"` targets the sandbox, any other value
//! targets live.

use serde::{Deserialize, Serialize};

/// Upstream verification environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Test environment; jobs are not billed and results are simulated.
    Sandbox,
    /// Production environment.
    Live,
}

impl Environment {
    /// Derive the environment from the `SID_SERVER` selector value.
    ///
    /// The selector `"0"` maps to sandbox; every other value maps to live.
    pub fn from_sid_server(sid_server: &str) -> Self {
        if sid_server == "0" {
            Environment::Sandbox
        } else {
            Environment::Live
        }
    }

    /// Label used in API responses and by the upstream SDK.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Live => "live",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
