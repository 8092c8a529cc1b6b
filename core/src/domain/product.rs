//! Verification product catalog
//!
//! Smile ID exposes a closed set of verification products. The selector
//! arrives as a query-string value; anything outside the set is rejected
//! with a message listing the allowed values.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Allowed product selectors, sorted, as they appear in error messages.
pub const ALLOWED_PRODUCTS: [&str; 7] = [
    "authentication",
    "basic_kyc",
    "biometric_kyc",
    "doc_verification",
    "enhanced_doc_verification",
    "enhanced_kyc",
    "smartselfie",
];

/// A Smile ID verification product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Product {
    /// Selfie comparison against a previously enrolled user.
    #[serde(rename = "authentication")]
    Authentication,
    #[serde(rename = "basic_kyc")]
    BasicKyc,
    #[serde(rename = "smartselfie")]
    SmartSelfie,
    #[serde(rename = "biometric_kyc")]
    BiometricKyc,
    #[serde(rename = "enhanced_kyc")]
    EnhancedKyc,
    #[serde(rename = "doc_verification")]
    DocVerification,
    #[serde(rename = "enhanced_doc_verification")]
    EnhancedDocVerification,
}

impl Product {
    /// Parse a query-string selector into a product.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "authentication" => Ok(Product::Authentication),
            "basic_kyc" => Ok(Product::BasicKyc),
            "smartselfie" => Ok(Product::SmartSelfie),
            "biometric_kyc" => Ok(Product::BiometricKyc),
            "enhanced_kyc" => Ok(Product::EnhancedKyc),
            "doc_verification" => Ok(Product::DocVerification),
            "enhanced_doc_verification" => Ok(Product::EnhancedDocVerification),
            other => Err(ValidationError::InvalidProduct { product: other.to_string() }),
        }
    }

    /// Selector string sent to the upstream provider and echoed in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Authentication => "authentication",
            Product::BasicKyc => "basic_kyc",
            Product::SmartSelfie => "smartselfie",
            Product::BiometricKyc => "biometric_kyc",
            Product::EnhancedKyc => "enhanced_kyc",
            Product::DocVerification => "doc_verification",
            Product::EnhancedDocVerification => "enhanced_doc_verification",
        }
    }

    /// Whether this product requires a previously enrolled user identifier.
    ///
    /// Authentication compares a fresh selfie against an existing reference
    /// selfie, so the caller must name the enrolled user. All other products
    /// enroll a new user when no identifier is supplied.
    pub fn requires_enrolled_user(&self) -> bool {
        matches!(self, Product::Authentication)
    }
}

impl Default for Product {
    fn default() -> Self {
        Product::BiometricKyc
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_allowed_selector_parses() {
        for selector in ALLOWED_PRODUCTS {
            let product = Product::parse(selector).expect("selector is allowed");
            assert_eq!(product.as_str(), selector);
        }
    }

    #[test]
    fn unknown_selector_is_rejected_with_allowed_list() {
        let err = Product::parse("face_match").expect_err("not in the catalog");
        let message = err.to_string();
        assert!(message.contains("face_match"));
        for selector in ALLOWED_PRODUCTS {
            assert!(message.contains(selector), "missing {selector} in {message}");
        }
    }

    #[test]
    fn default_product_is_biometric_kyc() {
        assert_eq!(Product::default(), Product::BiometricKyc);
    }

    #[test]
    fn only_authentication_requires_enrollment() {
        assert!(Product::Authentication.requires_enrolled_user());
        assert!(!Product::SmartSelfie.requires_enrolled_user());
        assert!(!Product::BiometricKyc.requires_enrolled_user());
    }

    #[test]
    fn product_serializes_to_selector_string() {
        let json = serde_json::to_string(&Product::EnhancedDocVerification).unwrap();
        assert_eq!(json, "\"enhanced_doc_verification\"");
    }
}
