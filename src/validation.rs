//! Email format validation.
//!
//! A single pure predicate shared by the `User` entity and any input
//! checking that needs it. Kept deliberately simple: local part, exactly
//! one `@`, and a domain containing at least one dot-separated suffix.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Local part and domain segments exclude whitespace and '@', so a
    // matching string contains exactly one '@' and no spaces anywhere.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Returns true when `input` looks like a well-formed email address.
///
/// No side effects; an empty string is never valid.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_addresses() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(is_valid_email("user+tag@example.co.uk"));
    }

    #[test]
    fn test_rejects_empty_and_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("user@.com"));
    }

    #[test]
    fn test_rejects_multiple_at_signs() {
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("@@example.com"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com "));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
    }
}
