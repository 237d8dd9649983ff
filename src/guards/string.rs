//! String guards
//!
//! Checks over `&str` subjects: emptiness, length, full-string pattern
//! matches, character-class restrictions, and the password strength policy.
//! Length is counted in Unicode scalar values, not bytes.

use std::sync::LazyLock;

use dashmap::DashMap;
use regex::Regex;

use crate::core::error::{GuardError, GuardErrorKind, GuardResult};
use crate::patterns;

/// Fails with [`EmptyString`] when the value is empty or all-whitespace.
///
/// [`EmptyString`]: crate::core::error::GuardErrorKind::EmptyString
///
/// # Examples
///
/// ```
/// use orion_guard::guards::string::not_empty;
///
/// assert!(not_empty("hello", "greeting").is_ok());
/// assert!(not_empty("   ", "greeting").is_err());
/// ```
pub fn not_empty(value: &str, parameter: &str) -> GuardResult<()> {
    if value.trim().is_empty() {
        return Err(GuardError::empty_string(parameter));
    }
    Ok(())
}

/// Fails with [`OutOfRange`] when the char count is outside `[min, max]`.
///
/// Bounds are inclusive.
///
/// [`OutOfRange`]: GuardErrorKind::OutOfRange
pub fn length(value: &str, min: usize, max: usize, parameter: &str) -> GuardResult<()> {
    let count = value.chars().count();
    if count < min || count > max {
        return Err(GuardError::out_of_range(
            parameter,
            format!("{min} characters"),
            format!("{max} characters"),
        ));
    }
    Ok(())
}

/// Fails with [`OutOfRange`] when the char count is not exactly `expected`.
///
/// [`OutOfRange`]: GuardErrorKind::OutOfRange
pub fn exact_length(value: &str, expected: usize, parameter: &str) -> GuardResult<()> {
    if value.chars().count() != expected {
        return Err(GuardError::new(
            GuardErrorKind::OutOfRange,
            parameter,
            format!("`{parameter}` must be exactly {expected} characters long"),
        ));
    }
    Ok(())
}

/// Anchored wrappers compiled from caller patterns, one per distinct pattern.
static ANCHORED: LazyLock<DashMap<String, Regex>> = LazyLock::new(DashMap::new);

/// Fails with [`RegexMismatch`] unless the pattern matches the whole string.
///
/// The match is anchored on both ends regardless of how the pattern was
/// written: the check runs against `^(?:pattern)$`, so a match that covers
/// only part of the subject is a violation. Scanning for a full-span match
/// would not work here; leftmost-first search can settle on a shorter
/// alternative at position zero and never report the full-length one.
///
/// [`RegexMismatch`]: crate::core::error::GuardErrorKind::RegexMismatch
pub fn matches(value: &str, pattern: &Regex, parameter: &str) -> GuardResult<()> {
    let anchored = ANCHORED
        .entry(pattern.as_str().to_owned())
        .or_insert_with(|| {
            Regex::new(&format!("^(?:{})$", pattern.as_str()))
                .expect("anchoring a compiled pattern preserves validity")
        })
        .clone();
    if !anchored.is_match(value) {
        return Err(GuardError::regex_mismatch(parameter, pattern.as_str()));
    }
    Ok(())
}

/// Fails with [`RegexMismatch`] unless the value is ASCII letters only.
///
/// [`RegexMismatch`]: crate::core::error::GuardErrorKind::RegexMismatch
pub fn alphabetic(value: &str, parameter: &str) -> GuardResult<()> {
    matches(value, &patterns::ALPHABETIC, parameter)
}

/// Fails with [`RegexMismatch`] unless the value is ASCII digits only.
///
/// [`RegexMismatch`]: crate::core::error::GuardErrorKind::RegexMismatch
pub fn digits(value: &str, parameter: &str) -> GuardResult<()> {
    matches(value, &patterns::DIGITS, parameter)
}

/// Fails with [`RegexMismatch`] unless the value is ASCII letters and digits
/// only.
///
/// [`RegexMismatch`]: crate::core::error::GuardErrorKind::RegexMismatch
pub fn alphanumeric(value: &str, parameter: &str) -> GuardResult<()> {
    matches(value, &patterns::ALPHANUMERIC, parameter)
}

/// Fails with [`RegexMismatch`] unless every char is in the ASCII range.
///
/// [`RegexMismatch`]: crate::core::error::GuardErrorKind::RegexMismatch
pub fn ascii(value: &str, parameter: &str) -> GuardResult<()> {
    matches(value, &patterns::ASCII, parameter)
}

/// Fails when the value contains any whitespace character.
pub fn no_whitespace(value: &str, parameter: &str) -> GuardResult<()> {
    if value.chars().any(char::is_whitespace) {
        return Err(GuardError::custom(
            "whitespace",
            parameter,
            format!("`{parameter}` must not contain whitespace"),
        ));
    }
    Ok(())
}

/// Fails when the value contains a character outside `allowed`.
pub fn chars_in_set(value: &str, allowed: &str, parameter: &str) -> GuardResult<()> {
    if value.chars().any(|c| !allowed.contains(c)) {
        return Err(GuardError::custom(
            "charset",
            parameter,
            format!("`{parameter}` must only contain characters from the set `{allowed}`"),
        ));
    }
    Ok(())
}

/// Fails when the value does not start with `prefix`.
pub fn starts_with(value: &str, prefix: &str, parameter: &str) -> GuardResult<()> {
    if !value.starts_with(prefix) {
        return Err(GuardError::custom(
            "prefix",
            parameter,
            format!("`{parameter}` must start with `{prefix}`"),
        ));
    }
    Ok(())
}

/// Fails when the value does not end with `suffix`.
pub fn ends_with(value: &str, suffix: &str, parameter: &str) -> GuardResult<()> {
    if !value.ends_with(suffix) {
        return Err(GuardError::custom(
            "suffix",
            parameter,
            format!("`{parameter}` must end with `{suffix}`"),
        ));
    }
    Ok(())
}

/// Fails when the value contains the forbidden substring.
pub fn not_containing(value: &str, forbidden: &str, parameter: &str) -> GuardResult<()> {
    if value.contains(forbidden) {
        return Err(GuardError::custom(
            "forbidden-substring",
            parameter,
            format!("`{parameter}` must not contain `{forbidden}`"),
        ));
    }
    Ok(())
}

/// Fails when any cased character is lowercase.
pub fn uppercase(value: &str, parameter: &str) -> GuardResult<()> {
    if value.chars().any(char::is_lowercase) {
        return Err(GuardError::custom(
            "uppercase",
            parameter,
            format!("`{parameter}` must be all uppercase"),
        ));
    }
    Ok(())
}

/// Fails when any cased character is uppercase.
pub fn lowercase(value: &str, parameter: &str) -> GuardResult<()> {
    if value.chars().any(char::is_uppercase) {
        return Err(GuardError::custom(
            "lowercase",
            parameter,
            format!("`{parameter}` must be all lowercase"),
        ));
    }
    Ok(())
}

/// Special characters accepted by [`strong_password`].
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Fails with [`WeakSecret`] unless the value is at least 8 chars and mixes
/// lowercase, uppercase, a digit, and one of `@$!%*?&`.
///
/// Implemented with explicit character-class counting rather than a
/// lookahead regex; the `regex` crate has no lookaround.
///
/// [`WeakSecret`]: crate::core::error::GuardErrorKind::WeakSecret
pub fn strong_password(value: &str, parameter: &str) -> GuardResult<()> {
    let long_enough = value.chars().count() >= 8;
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    if !(long_enough && has_lower && has_upper && has_digit && has_special) {
        return Err(GuardError::weak_secret(parameter));
    }
    Ok(())
}
