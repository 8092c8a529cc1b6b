//! Tests for the token issuance service.
