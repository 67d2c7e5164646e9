//! Phone.Email client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhoneEmailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Profile fetch failed: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed profile document: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
