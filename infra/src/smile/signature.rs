//! Smile ID request signing
//!
//! Every token request carries an HMAC-SHA256 signature computed over
//! `timestamp + partner_id + "sid_request"` with the partner API key,
//! base64-encoded. The timestamp is an ISO-8601 UTC instant and must be
//! sent alongside the signature so the upstream can recompute it.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Fixed suffix mixed into every signature, per the Smile ID protocol.
const SID_REQUEST_SUFFIX: &[u8] = b"sid_request";

/// Signer for Smile ID API requests.
#[derive(Debug, Clone)]
pub struct Signature {
    partner_id: String,
    api_key: String,
}

impl Signature {
    pub fn new(partner_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { partner_id: partner_id.into(), api_key: api_key.into() }
    }

    /// Sign the given ISO-8601 timestamp.
    pub fn generate(&self, timestamp: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(timestamp.as_bytes());
        mac.update(self.partner_id.as_bytes());
        mac.update(SID_REQUEST_SUFFIX);
        BASE64.encode(mac.finalize().into_bytes())
    }

    /// Sign the current instant, returning `(timestamp, signature)`.
    pub fn generate_now(&self) -> (String, String) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let signature = self.generate(&timestamp);
        (timestamp, signature)
    }
}
