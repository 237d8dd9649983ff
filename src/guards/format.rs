//! Format guards
//!
//! Checks that delegate to a well-known parser or pattern. A parse failure
//! is always translated to [`InvalidFormat`] with the matching
//! [`FormatKind`]; the underlying parser's error type never escapes.
//!
//! [`InvalidFormat`]: crate::core::error::GuardErrorKind::InvalidFormat
//! [`FormatKind`]: crate::core::error::FormatKind

use std::net::IpAddr;

use url::Url;
use uuid::Uuid;

use crate::core::error::{FormatKind, GuardError, GuardResult};
use crate::guards::string;
use crate::patterns;

/// Fails with [`InvalidFormat(Email)`] unless the value looks like an email
/// address (`^[^@\s]+@[^@\s]+\.[^@\s]+$`).
///
/// [`InvalidFormat(Email)`]: crate::core::error::FormatKind::Email
///
/// # Examples
///
/// ```
/// use orion_guard::guards::format::email;
///
/// assert!(email("ada@example.com", "email").is_ok());
/// assert!(email("not-an-email", "email").is_err());
/// ```
pub fn email(value: &str, parameter: &str) -> GuardResult<()> {
    string::matches(value, &patterns::EMAIL, parameter)
        .map_err(|_| GuardError::invalid_format(parameter, FormatKind::Email))
}

/// Fails with [`InvalidFormat(Phone)`] unless the value is an E.164-like
/// phone number (`^\+?[1-9]\d{1,14}$`).
///
/// [`InvalidFormat(Phone)`]: crate::core::error::FormatKind::Phone
pub fn phone(value: &str, parameter: &str) -> GuardResult<()> {
    string::matches(value, &patterns::PHONE, parameter)
        .map_err(|_| GuardError::invalid_format(parameter, FormatKind::Phone))
}

/// Fails with [`InvalidFormat(Url)`] unless the value is an absolute URL
/// with an `http` or `https` scheme.
///
/// [`InvalidFormat(Url)`]: crate::core::error::FormatKind::Url
pub fn url(value: &str, parameter: &str) -> GuardResult<()> {
    match Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(GuardError::invalid_format(parameter, FormatKind::Url)),
    }
}

/// Fails with [`InvalidFormat(Ip)`] unless the value parses as an IPv4 or
/// IPv6 address.
///
/// [`InvalidFormat(Ip)`]: crate::core::error::FormatKind::Ip
pub fn ip(value: &str, parameter: &str) -> GuardResult<()> {
    if value.parse::<IpAddr>().is_err() {
        return Err(GuardError::invalid_format(parameter, FormatKind::Ip));
    }
    Ok(())
}

/// Fails with [`InvalidFormat(Guid)`] unless the value parses as a GUID.
///
/// [`InvalidFormat(Guid)`]: crate::core::error::FormatKind::Guid
pub fn guid(value: &str, parameter: &str) -> GuardResult<()> {
    if Uuid::parse_str(value).is_err() {
        return Err(GuardError::invalid_format(parameter, FormatKind::Guid));
    }
    Ok(())
}

/// Fails with [`InvalidFormat(Json)`] unless the value is a well-formed
/// JSON document.
///
/// [`InvalidFormat(Json)`]: crate::core::error::FormatKind::Json
pub fn json(value: &str, parameter: &str) -> GuardResult<()> {
    if serde_json::from_str::<serde_json::Value>(value).is_err() {
        return Err(GuardError::invalid_format(parameter, FormatKind::Json));
    }
    Ok(())
}
