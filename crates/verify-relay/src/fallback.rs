//! Masking adapter for upstream failures.
//!
//! The deployed service never surfaced upstream failures to its callers;
//! it answered HTTP 200 with a synthetic success carrying a placeholder
//! number and a note describing what went wrong. That contract lives here
//! as an isolated adapter so the verify path itself stays a plain
//! `Result` and the masking can be switched off in configuration.

use crate::api::VerificationResult;
use crate::config::{FallbackConfig, PhoneConfig};
use crate::error::RelayError;

const PLACEHOLDER_FIRST_NAME: &str = "Test";
const PLACEHOLDER_LAST_NAME: &str = "User";

/// Build the synthetic success response for a failed upstream fetch.
pub fn masked_result(
    fallback: &FallbackConfig,
    phone: &PhoneConfig,
    error: &RelayError,
) -> VerificationResult {
    VerificationResult {
        success: true,
        phone_number: fallback.placeholder_number.clone(),
        country_code: phone.default_country_code.clone(),
        first_name: PLACEHOLDER_FIRST_NAME.to_string(),
        last_name: PLACEHOLDER_LAST_NAME.to_string(),
        full_name: format!("{} {}", PLACEHOLDER_FIRST_NAME, PLACEHOLDER_LAST_NAME),
        email: String::new(),
        note: Some("Using mock data due to error".to_string()),
        error: Some(error.to_string()),
    }
}

/// Fixed mock result for frontend integration without an upstream.
pub fn mock_result(fallback: &FallbackConfig, phone: &PhoneConfig) -> VerificationResult {
    VerificationResult {
        success: true,
        phone_number: fallback.placeholder_number.clone(),
        country_code: phone.default_country_code.clone(),
        first_name: PLACEHOLDER_FIRST_NAME.to_string(),
        last_name: PLACEHOLDER_LAST_NAME.to_string(),
        full_name: format!("{} {}", PLACEHOLDER_FIRST_NAME, PLACEHOLDER_LAST_NAME),
        email: String::new(),
        note: Some("Static mock response".to_string()),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_result_carries_error_description() {
        let fallback = FallbackConfig::default();
        let phone = PhoneConfig::default();
        let result = masked_result(&fallback, &phone, &RelayError::MissingParameter);

        assert!(result.success);
        assert_eq!(result.phone_number, "9891800888");
        assert_eq!(result.country_code, "91");
        assert_eq!(result.full_name, "Test User");
        assert_eq!(result.note.as_deref(), Some("Using mock data due to error"));
        assert!(result.error.is_some());
    }

    #[test]
    fn test_masked_result_uses_configured_placeholder() {
        let fallback = FallbackConfig {
            placeholder_number: "9876543210".to_string(),
            ..FallbackConfig::default()
        };
        let phone = PhoneConfig::default();
        let result = masked_result(&fallback, &phone, &RelayError::MissingParameter);

        assert_eq!(result.phone_number, "9876543210");
    }

    #[test]
    fn test_mock_result_has_no_error() {
        let result = mock_result(&FallbackConfig::default(), &PhoneConfig::default());
        assert!(result.success);
        assert!(result.error.is_none());
        assert_eq!(result.phone_number, "9891800888");
    }
}
