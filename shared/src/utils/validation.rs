//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9._-]{2,29}$").unwrap());

/// Common validation functions
pub mod validators {
    use super::USERNAME_PATTERN;

    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if an email address is valid (basic check)
    pub fn is_valid_email(email: &str) -> bool {
        email.contains('@') && email.contains('.') && email.len() >= 5
    }

    /// Check if a URL is valid (basic check)
    pub fn is_valid_url(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }

    /// Check if a username is acceptable: lowercase alphanumeric start,
    /// then letters, digits, dots, underscores or dashes, 3-30 chars total
    pub fn is_valid_username(username: &str) -> bool {
        USERNAME_PATTERN.is_match(username)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("hello"));
        assert!(!not_empty("   "));
        assert!(!not_empty(""));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("nope"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://cdn.example.com/img.jpg"));
        assert!(!is_valid_url("ftp://example.com"));
    }

    #[test]
    fn test_is_valid_username() {
        assert!(is_valid_username("john_doe"));
        assert!(is_valid_username("user123"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("Has Spaces"));
        assert!(!is_valid_username("_leading"));
    }
}
