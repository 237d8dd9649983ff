//! Shared compiled patterns
//!
//! Regexes used by more than one guard, compiled once per process. All
//! patterns here are anchored; the pattern guards always check a full-string
//! match.

use std::sync::LazyLock;

use regex::Regex;

/// Simple email shape: something, `@`, something, a dot, something, with no
/// whitespace anywhere.
pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// E.164-like phone number: optional `+`, leading non-zero digit, 2 to 15
/// digits total.
pub static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern compiles"));

/// ASCII letters only.
pub static ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("alphabetic pattern compiles"));

/// ASCII digits only.
pub static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("digits pattern compiles"));

/// ASCII letters and digits only.
pub static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("alphanumeric pattern compiles"));

/// Printable and control ASCII range.
pub static ASCII: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x00-\x7F]+$").expect("ascii pattern compiles"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL.is_match("ada@example.com"));
        assert!(!EMAIL.is_match("not-an-email"));
        assert!(!EMAIL.is_match("a b@example.com"));
    }

    #[test]
    fn test_phone_pattern() {
        assert!(PHONE.is_match("+14155552671"));
        assert!(PHONE.is_match("4155552671"));
        assert!(!PHONE.is_match("0123"));
        assert!(!PHONE.is_match("+1 415 555"));
    }
}
