//! Error types for the verification relay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use phone_email_client::PhoneEmailError;
use serde::Serialize;
use thiserror::Error;

/// Relay error types.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("user_json_url is required in request body")]
    MissingParameter,

    #[error("Profile URL is not hosted by the trusted upstream: {0}")]
    UntrustedSource(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] PhoneEmailError),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            RelayError::MissingParameter => (StatusCode::BAD_REQUEST, "MISSING_PARAMETER"),
            RelayError::UntrustedSource(_) => (StatusCode::BAD_REQUEST, "UNTRUSTED_SOURCE"),
            RelayError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
