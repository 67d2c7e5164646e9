//! Wire types for the Phone.Email profile document.

use serde::Deserialize;

/// Raw phone value as it appears in the profile document.
///
/// Phone.Email has been observed returning the number both as a JSON
/// string and as a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPhoneNumber {
    Text(String),
    Numeric(u64),
}

impl RawPhoneNumber {
    /// The value as a string, digits and formatting included.
    pub fn as_string(&self) -> String {
        match self {
            RawPhoneNumber::Text(s) => s.clone(),
            RawPhoneNumber::Numeric(n) => n.to_string(),
        }
    }
}

/// Verified user profile hosted by Phone.Email.
///
/// Every field is optional; callers apply their own defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub user_phone_number: Option<RawPhoneNumber>,

    #[serde(default)]
    pub user_country_code: Option<String>,

    #[serde(default)]
    pub user_first_name: Option<String>,

    #[serde(default)]
    pub user_last_name: Option<String>,

    #[serde(default)]
    pub user_email: Option<String>,
}
