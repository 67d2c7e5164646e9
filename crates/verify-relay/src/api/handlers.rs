//! HTTP request handlers.

use super::types::{
    EchoResponse, HealthResponse, ServiceDescriptor, VerificationResult, VerifyRequest,
};
use super::AppState;
use crate::error::RelayError;
use crate::{fallback, phone};
use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

/// Service descriptor endpoint.
pub async fn root() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor::default())
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        secret_configured: state.config.secret_configured(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Resolve a Phone.Email profile URL into a verification result.
///
/// Request validation failures surface as HTTP 400. Upstream failures
/// either surface as HTTP 502 or, with masking enabled, become a
/// synthetic success response via the fallback adapter.
pub async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerificationResult>, RelayError> {
    let url = match request.user_json_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => return Err(RelayError::MissingParameter),
    };

    info!(url = %url, "Verification request received");

    match verify_profile(&state, &url).await {
        Ok(result) => Ok(Json(result)),
        Err(err @ RelayError::Upstream(_)) if state.config.fallback.mask_upstream_errors => {
            warn!(error = %err, "Upstream fetch failed, returning masked response");
            Ok(Json(fallback::masked_result(
                &state.config.fallback,
                &state.config.phone,
                &err,
            )))
        }
        Err(err) => Err(err),
    }
}

/// Fetch the profile document and shape it into a verification result.
async fn verify_profile(state: &AppState, url: &str) -> Result<VerificationResult, RelayError> {
    if state.config.upstream.enforce_trusted_source
        && !url.starts_with(&state.config.upstream.trusted_prefix)
    {
        warn!(url = %url, "Rejected profile URL outside the trusted host");
        return Err(RelayError::UntrustedSource(url.to_string()));
    }

    let profile = state.client.fetch_profile(url).await?;

    let country_code = profile
        .user_country_code
        .unwrap_or_else(|| state.config.phone.default_country_code.clone());

    let raw_phone = profile
        .user_phone_number
        .map(|p| p.as_string())
        .unwrap_or_default();

    let phone_number =
        phone::normalize_phone_number(&raw_phone, &country_code, &state.config.phone);

    if !phone::looks_like_mobile(&phone_number) {
        warn!(phone_number = %phone_number, "Normalized number does not look like a mobile number");
    }

    let first_name = profile.user_first_name.unwrap_or_default();
    let last_name = profile.user_last_name.unwrap_or_default();
    let full_name = format!("{} {}", first_name, last_name)
        .trim()
        .to_string();

    info!(phone_number = %phone_number, "Profile verified");

    Ok(VerificationResult {
        success: true,
        phone_number,
        country_code,
        first_name,
        last_name,
        full_name,
        email: profile.user_email.unwrap_or_default(),
        note: None,
        error: None,
    })
}

/// Debug endpoint: echo the request body back.
pub async fn test_echo(Json(body): Json<Value>) -> Json<EchoResponse> {
    Json(EchoResponse {
        message: "Test endpoint working",
        received_data: body,
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Debug endpoint: fixed mock verification result.
pub async fn test_mock(State(state): State<AppState>) -> Json<VerificationResult> {
    Json(fallback::mock_result(
        &state.config.fallback,
        &state.config.phone,
    ))
}
