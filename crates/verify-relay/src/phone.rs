//! Phone number normalization.

use crate::config::{PhoneConfig, PrefixMode};

/// Reduce a raw phone value to its 10-digit domestic subscriber number.
///
/// Every non-digit character is stripped first. An over-long number loses
/// its country prefix when it matches, and anything still longer than ten
/// digits keeps only its last ten. Numbers of ten digits or fewer pass
/// through untouched, so the function is idempotent on its own output.
pub fn normalize_phone_number(raw: &str, country_code: &str, config: &PhoneConfig) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() > 10 {
        let prefix = match config.prefix_mode {
            PrefixMode::CountryCode => country_code,
            PrefixMode::Fixed => config.fixed_prefix.as_str(),
        };
        // country codes arrive with formatting of their own ("+91")
        let prefix: String = prefix.chars().filter(|c| c.is_ascii_digit()).collect();

        if !prefix.is_empty() && digits.starts_with(&prefix) {
            digits = digits[prefix.len()..].to_string();
        }
        if digits.len() > 10 {
            digits = digits[digits.len() - 10..].to_string();
        }
    }

    digits
}

/// Advisory plausibility check for Indian mobile numbering: exactly ten
/// digits with a leading 6, 7, 8 or 9. Failures are logged by the caller,
/// never rejected.
pub fn looks_like_mobile(number: &str) -> bool {
    number.len() == 10
        && number.bytes().all(|b| b.is_ascii_digit())
        && matches!(number.as_bytes()[0], b'6'..=b'9')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country_code_config() -> PhoneConfig {
        PhoneConfig::default()
    }

    fn fixed_config(prefix: &str) -> PhoneConfig {
        PhoneConfig {
            prefix_mode: PrefixMode::Fixed,
            fixed_prefix: prefix.to_string(),
            ..PhoneConfig::default()
        }
    }

    #[test]
    fn test_ten_digit_number_unchanged() {
        let config = country_code_config();
        assert_eq!(
            normalize_phone_number("9891800888", "91", &config),
            "9891800888"
        );
    }

    #[test]
    fn test_idempotent_on_normalized_output() {
        let config = country_code_config();
        let once = normalize_phone_number("+91 98918 00888", "91", &config);
        let twice = normalize_phone_number(&once, "91", &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strips_formatting_and_country_code() {
        let config = country_code_config();
        assert_eq!(
            normalize_phone_number("+91 98918 00888", "91", &config),
            "9891800888"
        );
    }

    #[test]
    fn test_eleven_digits_without_prefix_keeps_last_ten() {
        let config = country_code_config();
        assert_eq!(
            normalize_phone_number("09891800888", "91", &config),
            "9891800888"
        );
    }

    #[test]
    fn test_prefix_strip_then_last_ten() {
        // 13 digits: country code plus a stray leading zero on the rest
        let config = country_code_config();
        assert_eq!(
            normalize_phone_number("9109891800888", "91", &config),
            "9891800888"
        );
    }

    #[test]
    fn test_dynamic_country_code() {
        let config = country_code_config();
        assert_eq!(
            normalize_phone_number("+1 (415) 555-1234", "1", &config),
            "4155551234"
        );
    }

    #[test]
    fn test_country_code_with_plus_sign() {
        let config = country_code_config();
        assert_eq!(
            normalize_phone_number("919891800888", "+91", &config),
            "9891800888"
        );
    }

    #[test]
    fn test_fixed_mode_ignores_payload_country_code() {
        let config = fixed_config("91");
        // payload says "1", fixed mode still strips "91"
        assert_eq!(
            normalize_phone_number("919891800888", "1", &config),
            "9891800888"
        );
    }

    #[test]
    fn test_short_number_passes_through() {
        let config = country_code_config();
        assert_eq!(normalize_phone_number("555-1234", "91", &config), "5551234");
    }

    #[test]
    fn test_empty_input() {
        let config = country_code_config();
        assert_eq!(normalize_phone_number("", "91", &config), "");
    }

    #[test]
    fn test_non_digit_input() {
        let config = country_code_config();
        assert_eq!(normalize_phone_number("not a number", "91", &config), "");
    }

    #[test]
    fn test_looks_like_mobile() {
        assert!(looks_like_mobile("9891800888"));
        assert!(looks_like_mobile("6000000000"));
        assert!(!looks_like_mobile("5891800888"));
        assert!(!looks_like_mobile("989180088"));
        assert!(!looks_like_mobile("98918008888"));
        assert!(!looks_like_mobile(""));
        assert!(!looks_like_mobile("989180088x"));
    }
}
