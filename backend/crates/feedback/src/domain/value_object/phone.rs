//! Phone Number Validation
//!
//! Intentionally loose format check: an optional leading `+` followed
//! by 10 to 15 digits, spaces, hyphens or parentheses. The number is
//! stored as entered and only used by staff to reach the guest.

use std::sync::OnceLock;

use regex::Regex;

const PHONE_PATTERN: &str = r"^[+]?[0-9\s\-()]{10,15}$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

/// Check a phone number against the accepted format
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_formats() {
        assert!(is_valid_phone("0123456789"));
        assert!(is_valid_phone("+15551234567"));
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("(555) 123-4567"));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("not a phone"));
        assert!(!is_valid_phone("5551234567x99999999"));
        // `+` only allowed in the first position
        assert!(!is_valid_phone("555+123+4567"));
    }

    #[test]
    fn test_length_bounds() {
        assert!(!is_valid_phone("123456789")); // 9 chars
        assert!(is_valid_phone("1234567890")); // 10 chars
        assert!(is_valid_phone("123456789012345")); // 15 chars
        assert!(!is_valid_phone("1234567890123456")); // 16 chars
    }
}
