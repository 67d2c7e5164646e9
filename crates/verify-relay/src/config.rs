//! Configuration for the verification relay.

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

/// Placeholder secret shipped for local development.
///
/// A process still running with this value is not talking to the real
/// upstream; `/health` reports it as unconfigured.
pub const PLACEHOLDER_CLIENT_SECRET: &str = "test-secret-123";

/// Relay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream (Phone.Email) configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Phone number normalization configuration
    #[serde(default)]
    pub phone: PhoneConfig,

    /// Upstream failure masking configuration
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Phone.Email client secret appended to every profile fetch
    #[serde(default = "default_client_secret")]
    pub client_secret: SecretString,

    /// Trusted prefix for user-supplied profile URLs
    #[serde(default = "default_trusted_prefix")]
    pub trusted_prefix: String,

    /// Reject profile URLs that do not start with the trusted prefix
    #[serde(default)]
    pub enforce_trusted_source: bool,

    /// Profile fetch timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneConfig {
    /// Country code assumed when the profile does not carry one
    #[serde(default = "default_country_code")]
    pub default_country_code: String,

    /// Which country prefix to strip from over-long numbers
    #[serde(default)]
    pub prefix_mode: PrefixMode,

    /// Prefix used in `fixed` mode
    #[serde(default = "default_fixed_prefix")]
    pub fixed_prefix: String,
}

/// How the country prefix of an over-long number is chosen.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMode {
    /// Strip the country code carried by the profile document
    #[default]
    CountryCode,
    /// Strip the configured fixed prefix
    Fixed,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FallbackConfig {
    /// Convert upstream failures into a synthetic success response
    #[serde(default = "default_true")]
    pub mask_upstream_errors: bool,

    /// Placeholder subscriber number used in masked and mock responses
    #[serde(default = "default_placeholder_number")]
    pub placeholder_number: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            client_secret: default_client_secret(),
            trusted_prefix: default_trusted_prefix(),
            enforce_trusted_source: false,
            timeout: default_timeout(),
        }
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            default_country_code: default_country_code(),
            prefix_mode: PrefixMode::default(),
            fixed_prefix: default_fixed_prefix(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            mask_upstream_errors: true,
            placeholder_number: default_placeholder_number(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            phone: PhoneConfig::default(),
            fallback: FallbackConfig::default(),
            log: LogConfig::default(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    10000
}

fn default_client_secret() -> SecretString {
    SecretString::new(PLACEHOLDER_CLIENT_SECRET.into())
}

fn default_trusted_prefix() -> String {
    "https://user.phone.email/".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_country_code() -> String {
    "91".into()
}

fn default_fixed_prefix() -> String {
    "91".into()
}

fn default_true() -> bool {
    true
}

fn default_placeholder_number() -> String {
    "9891800888".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl RelayConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Whether the client secret has been changed from its placeholder.
    pub fn secret_configured(&self) -> bool {
        self.upstream.client_secret.expose_secret() != PLACEHOLDER_CLIENT_SECRET
    }
}
