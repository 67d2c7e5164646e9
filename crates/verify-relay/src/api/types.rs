//! API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to resolve a Phone.Email profile URL.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// URL of the verified profile document hosted by Phone.Email.
    /// Optional at the serde layer so a missing field maps to the
    /// documented 400 instead of a generic body rejection.
    #[serde(default)]
    pub user_json_url: Option<String>,
}

/// Verification summary returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub success: bool,

    /// Canonical 10-digit domestic subscriber number
    pub phone_number: String,

    pub country_code: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,

    /// Present only on masked fallback and mock responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Underlying failure description on masked fallback responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Service descriptor returned from the root endpoint.
#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub message: &'static str,
    pub status: &'static str,
    pub endpoints: EndpointMap,
    pub instructions: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EndpointMap {
    pub verify: &'static str,
    pub health: &'static str,
}

impl Default for ServiceDescriptor {
    fn default() -> Self {
        Self {
            message: "Phone.Email Verification Server",
            status: "running",
            endpoints: EndpointMap {
                verify: "POST /verify",
                health: "GET /health",
            },
            instructions: "Send POST request to /verify with { \"user_json_url\": \"your_url\" }",
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub secret_configured: bool,
    pub timestamp: String,
}

/// Echo response from the debug endpoint.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub message: &'static str,
    pub received_data: Value,
    pub timestamp: String,
}
