//! Web token request and result value objects.

use serde::{Deserialize, Serialize};
use sg_shared::config::Environment;

use crate::domain::product::Product;

/// One token request as sent to the upstream provider.
///
/// `job_id` is freshly generated for every request and never reused, so a
/// request carries no identity beyond the single call that created it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WebTokenRequest {
    /// Effective end-user identifier (caller-supplied or generated).
    pub user_id: String,
    /// Fresh identifier for this verification attempt.
    pub job_id: String,
    /// Verification product the session will run.
    pub product: Product,
}

/// Response payload for a successful token issuance.
///
/// Returned to the caller as-is; nothing here is persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IssuedToken {
    /// Short-lived web session token from the upstream provider.
    pub token: String,
    /// Partner identifier the token was issued under.
    pub partner_id: String,
    /// URL the provider will deliver job results to.
    pub callback_url: String,
    /// Upstream environment the token is valid in.
    pub environment: Environment,
    /// Product the session will run.
    pub product: Product,
    /// Effective end-user identifier.
    pub user_id: String,
    /// Identifier of this verification attempt.
    pub job_id: String,
}
