//! Email syntax check performed before calling the store.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("email is empty")]
    Empty,

    #[error("email is not a valid address: {0}")]
    Malformed(String),
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email regex is valid")
    })
}

/// Trim `raw` and check it looks like `local@domain.tld`.
///
/// Returns the trimmed address, which is what should be passed to the store.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !email_regex().is_match(trimmed) {
        return Err(ValidationError::Malformed(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert_eq!(validate_email("a@x.com").unwrap(), "a@x.com");
        assert_eq!(
            validate_email("first.last+tag@sub.example.uz").unwrap(),
            "first.last+tag@sub.example.uz"
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(validate_email("  a@x.com\n").unwrap(), "a@x.com");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(validate_email("Alice@X.com").unwrap(), "Alice@X.com");
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(validate_email(""), Err(ValidationError::Empty));
        assert_eq!(validate_email("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_malformed_is_rejected() {
        for bad in ["plainaddress", "a@x", "@x.com", "a@.com.", "a b@x.com", "a@@x.com", "a@x .com"] {
            assert!(
                matches!(validate_email(bad), Err(ValidationError::Malformed(_))),
                "{} should be rejected",
                bad
            );
        }
    }
}
