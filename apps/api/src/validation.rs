use once_cell::sync::Lazy;
use regex::Regex;

// Pragmatic approximation, not RFC 5322: word characters, dots and hyphens
// around a single '@', with a non-empty TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());

// E.164-like: exactly one leading '+' followed by 8-15 digits.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+\d{8,15}$").unwrap());

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn is_valid_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("john.doe@example.com"));
    }

    #[test]
    fn test_valid_email_with_hyphens() {
        assert!(is_valid_email("jane-doe@my-company.co"));
    }

    #[test]
    fn test_invalid_email_no_at() {
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_invalid_email_no_tld() {
        assert!(!is_valid_email("john@example"));
    }

    #[test]
    fn test_invalid_email_empty() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_invalid_email_with_spaces() {
        assert!(!is_valid_email("john doe@example.com"));
    }

    #[test]
    fn test_valid_phone() {
        assert!(is_valid_phone("+1234567890"));
    }

    #[test]
    fn test_valid_phone_max_length() {
        assert!(is_valid_phone("+123456789012345"));
    }

    #[test]
    fn test_invalid_phone_no_plus() {
        assert!(!is_valid_phone("1234567890"));
    }

    #[test]
    fn test_invalid_phone_too_short() {
        assert!(!is_valid_phone("+1234567"));
    }

    #[test]
    fn test_invalid_phone_too_long() {
        assert!(!is_valid_phone("+1234567890123456"));
    }

    #[test]
    fn test_invalid_phone_double_plus() {
        assert!(!is_valid_phone("++1234567890"));
    }

    #[test]
    fn test_invalid_phone_letters() {
        assert!(!is_valid_phone("+123456789a"));
    }
}
