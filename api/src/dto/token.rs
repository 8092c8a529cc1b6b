use serde::{Deserialize, Serialize};

/// Query parameters for GET /api/v1/token.
///
/// `product` stays a raw string here so an unknown selector produces the
/// descriptive 400 from the domain layer instead of a deserializer error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenQuery {
    /// Verification product selector; defaults to `biometric_kyc`.
    #[serde(default = "default_product")]
    pub product: String,

    /// End-user identifier. Required for `authentication`, where it must
    /// refer to a previously enrolled user; generated otherwise if absent.
    pub user_id: Option<String>,
}

fn default_product() -> String {
    "biometric_kyc".to_string()
}
