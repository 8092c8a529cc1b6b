//! Standard API response envelope types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unified error response body for API errors.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self { error: error.into(), message: message.into(), timestamp: Utc::now() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_code_message_and_timestamp() {
        let response = ErrorResponse::new("invalid_product", "Invalid product 'x'.");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":\"invalid_product\""));
        assert!(json.contains("\"message\":\"Invalid product 'x'.\""));
        assert!(json.contains("timestamp"));
    }
}
