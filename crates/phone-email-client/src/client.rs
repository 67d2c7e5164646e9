//! Phone.Email profile HTTP client.

use crate::error::PhoneEmailError;
use crate::types::UserProfile;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

const USER_AGENT: &str = "Phone.Email-Verification-Server";

/// Client for fetching verified profile documents from Phone.Email.
///
/// The client secret is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output. It is appended to the profile URL as
/// the `client_secret` query parameter on every fetch, which is how
/// Phone.Email authenticates the relying party.
#[derive(Clone)]
pub struct PhoneEmailClient {
    client: Client,
    client_secret: SecretString,
}

impl PhoneEmailClient {
    /// Create a new client with a bounded request timeout.
    pub fn new(
        client_secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PhoneEmailError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            client_secret: SecretString::new(client_secret.into()),
        })
    }

    /// Fetch the profile document behind `user_json_url`.
    ///
    /// Network failures, timeouts, non-success statuses and unparseable
    /// bodies all surface as distinct error variants so the caller can
    /// decide what to do with them.
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, user_json_url: &str) -> Result<UserProfile, PhoneEmailError> {
        let separator = if user_json_url.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}client_secret={}",
            user_json_url,
            separator,
            encode(self.client_secret.expose_secret())
        );

        debug!("Fetching profile document");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(status, "Profile fetch returned non-success status");
            return Err(PhoneEmailError::Api { status, message });
        }

        let body = response.text().await?;
        let profile = serde_json::from_str(&body)?;

        debug!("Profile document fetched");
        Ok(profile)
    }
}
