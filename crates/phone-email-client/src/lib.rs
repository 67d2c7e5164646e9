//! HTTP client for the Phone.Email identity-verification upstream.

mod client;
mod error;
mod types;

pub use client::PhoneEmailClient;
pub use error::PhoneEmailError;
pub use types::{RawPhoneNumber, UserProfile};
