//! Guard failure taxonomy
//!
//! Every guard in this crate reports violations through [`GuardError`]: one
//! kind per invariant category, the offending parameter name, and a single
//! human-readable sentence. Profile lookup problems are a separate,
//! configuration-level family ([`ProfileError`]) so callers can always tell
//! bad input apart from a miswired registry.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used by every guard and chain step.
pub type GuardResult<T> = Result<T, GuardError>;

// ============================================================================
// GUARD ERROR
// ============================================================================

/// A single guard violation.
///
/// Immutable once constructed. `causes` is empty for every atomic failure;
/// only the combined failure produced by [`GuardManager::execute`] in strict
/// mode carries the ordered list of underlying failures there.
///
/// [`GuardManager::execute`]: crate::core::manager::GuardManager::execute
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct GuardError {
    kind: GuardErrorKind,
    parameter: String,
    message: String,
    causes: Vec<GuardError>,
}

impl GuardError {
    /// Creates a guard error from its parts.
    ///
    /// Both `parameter` and `message` must be non-empty; every named
    /// constructor below upholds this.
    pub fn new(
        kind: GuardErrorKind,
        parameter: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let parameter = parameter.into();
        let message = message.into();
        debug_assert!(!parameter.is_empty(), "guard errors need a parameter name");
        debug_assert!(!message.is_empty(), "guard errors need a message");
        Self {
            kind,
            parameter,
            message,
            causes: Vec::new(),
        }
    }

    /// A required value was absent.
    pub fn null_value(parameter: impl Into<String>) -> Self {
        let parameter = parameter.into();
        let message = format!("`{parameter}` must not be null");
        Self::new(GuardErrorKind::NullValue, parameter, message)
    }

    /// A string was empty or all-whitespace.
    pub fn empty_string(parameter: impl Into<String>) -> Self {
        let parameter = parameter.into();
        let message = format!("`{parameter}` must not be empty or whitespace");
        Self::new(GuardErrorKind::EmptyString, parameter, message)
    }

    /// A value fell outside an inclusive `[min, max]` range.
    pub fn out_of_range(
        parameter: impl Into<String>,
        min: impl Display,
        max: impl Display,
    ) -> Self {
        let parameter = parameter.into();
        let message = format!("`{parameter}` must be between {min} and {max}");
        Self::new(GuardErrorKind::OutOfRange, parameter, message)
    }

    /// A string failed a full-string regex match.
    pub fn regex_mismatch(parameter: impl Into<String>, pattern: &str) -> Self {
        let parameter = parameter.into();
        let message = format!("`{parameter}` must match the pattern `{pattern}`");
        Self::new(GuardErrorKind::RegexMismatch, parameter, message)
    }

    /// A string failed one of the well-known format checks.
    pub fn invalid_format(parameter: impl Into<String>, format: FormatKind) -> Self {
        let parameter = parameter.into();
        let message = format!("`{parameter}` must be a valid {format}");
        Self::new(GuardErrorKind::InvalidFormat(format), parameter, message)
    }

    /// A date or time violated a temporal constraint.
    pub fn temporal(
        kind: TemporalKind,
        parameter: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(GuardErrorKind::Temporal(kind), parameter, message)
    }

    /// A number violated a comparison constraint.
    pub fn numeric(
        kind: NumericKind,
        parameter: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(GuardErrorKind::Numeric(kind), parameter, message)
    }

    /// A collection violated a shape constraint.
    pub fn collection(
        kind: CollectionKind,
        parameter: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(GuardErrorKind::Collection(kind), parameter, message)
    }

    /// A file failed a metadata check.
    pub fn file(kind: FileKind, parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(GuardErrorKind::File(kind), parameter, message)
    }

    /// A secret did not meet the strength policy.
    pub fn weak_secret(parameter: impl Into<String>) -> Self {
        let parameter = parameter.into();
        let message = format!(
            "`{parameter}` must be at least 8 characters and mix uppercase, \
             lowercase, a digit, and a special character"
        );
        Self::new(GuardErrorKind::WeakSecret, parameter, message)
    }

    /// A declared field of a record was never assigned.
    pub fn uninitialized_field(parameter: impl Into<String>, field: &str) -> Self {
        let parameter = parameter.into();
        let message = format!("`{parameter}` has an uninitialized field: `{field}`");
        Self::new(GuardErrorKind::UninitializedField, parameter, message)
    }

    /// A caller-defined violation.
    pub fn custom(
        code: impl Into<String>,
        parameter: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(GuardErrorKind::Custom(code.into()), parameter, message)
    }

    /// Combines an ordered list of failures into one strict-mode error.
    ///
    /// The combined error's parameter names every distinct offending
    /// parameter, in first-failure order.
    pub fn aggregate(causes: Vec<GuardError>) -> Self {
        debug_assert!(!causes.is_empty(), "an aggregate needs at least one cause");
        let mut parameters: Vec<&str> = Vec::new();
        for cause in &causes {
            if !parameters.contains(&cause.parameter()) {
                parameters.push(cause.parameter());
            }
        }
        let message = format!("{} guard check(s) failed", causes.len());
        let parameter = parameters.join(", ");
        let mut error = Self::new(GuardErrorKind::Aggregate, parameter, message);
        error.causes = causes;
        error
    }

    /// The failure kind. Exactly one per error instance.
    pub fn kind(&self) -> &GuardErrorKind {
        &self.kind
    }

    /// The name of the offending parameter.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// The one-sentence violation message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying failures, non-empty only for aggregate errors.
    pub fn causes(&self) -> &[GuardError] {
        &self.causes
    }

    /// Whether this error combines several underlying failures.
    pub fn is_aggregate(&self) -> bool {
        matches!(self.kind, GuardErrorKind::Aggregate)
    }
}

// ============================================================================
// ERROR KINDS
// ============================================================================

/// Categories of guard violations, one per invariant family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardErrorKind {
    /// A required value was absent.
    NullValue,
    /// A string was empty or all-whitespace.
    EmptyString,
    /// A value fell outside an inclusive range.
    OutOfRange,
    /// A string failed a regex match.
    RegexMismatch,
    /// A string failed a well-known format check.
    InvalidFormat(FormatKind),
    /// A date or time constraint was violated.
    Temporal(TemporalKind),
    /// A numeric comparison constraint was violated.
    Numeric(NumericKind),
    /// A collection shape constraint was violated.
    Collection(CollectionKind),
    /// A file metadata check failed.
    File(FileKind),
    /// A secret did not meet the strength policy.
    WeakSecret,
    /// A declared field was never assigned.
    UninitializedField,
    /// Several independent failures combined by a strict manager run.
    Aggregate,
    /// A caller-defined violation, tagged with a short code.
    Custom(String),
}

/// Well-known string formats checked by the format guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatKind {
    Email,
    Url,
    Ip,
    Guid,
    Phone,
    Json,
}

impl Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatKind::Email => write!(f, "email address"),
            FormatKind::Url => write!(f, "http(s) URL"),
            FormatKind::Ip => write!(f, "IP address"),
            FormatKind::Guid => write!(f, "GUID"),
            FormatKind::Phone => write!(f, "phone number"),
            FormatKind::Json => write!(f, "JSON document"),
        }
    }
}

/// Temporal constraint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalKind {
    /// The instant lies before the reference time.
    Past,
    /// The instant lies after the reference time.
    Future,
    /// The instant lies outside an inclusive window.
    OutOfRange,
    /// The date falls on a Saturday or Sunday.
    Weekend,
    /// The date falls on the wrong day of the week.
    WrongDay,
    /// The time of day lies outside the allowed hours.
    OutsideHours,
    /// The date is not the reference date.
    NotToday,
    /// The birth date is in the future or implausibly old.
    UnrealisticBirthDate,
}

/// Numeric constraint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    Negative,
    Zero,
    TooSmall,
    TooLarge,
    NotInteger,
}

/// Collection shape constraint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKind {
    /// The collection has zero elements.
    Empty,
    /// The element count exceeds the allowed maximum.
    ExceedsCount,
    /// At least one element is absent.
    ContainsNone,
}

/// File metadata constraint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// The path does not point at a readable file.
    NotFound,
    /// The file has zero length.
    Empty,
    /// The file extension is not in the allowed set.
    WrongExtension,
}

// ============================================================================
// PROFILE ERROR
// ============================================================================

/// Failures surfaced by the profile registry.
///
/// A lookup miss is a configuration mistake (unregistered name or mistyped
/// value), deliberately kept apart from the data-validation taxonomy above.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No recipe is registered under this name for this value type.
    #[error("no guard profile named `{name}` is registered for type `{type_name}`")]
    NotFound {
        /// The symbolic profile name that was looked up.
        name: String,
        /// The value type the lookup was dispatched on.
        type_name: &'static str,
    },

    /// The recipe ran and reported a data-validation failure.
    #[error(transparent)]
    Guard(#[from] GuardError),
}

impl ProfileError {
    /// Whether this is a lookup miss rather than a validation failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_constructors_fill_parameter_and_message() {
        let error = GuardError::empty_string("username");
        assert_eq!(error.parameter(), "username");
        assert_eq!(error.kind(), &GuardErrorKind::EmptyString);
        assert!(error.message().contains("username"));
        assert!(error.causes().is_empty());
    }

    #[test]
    fn test_out_of_range_names_bounds() {
        let error = GuardError::out_of_range("age", 18, 60);
        assert_eq!(error.message(), "`age` must be between 18 and 60");
    }

    #[test]
    fn test_display_is_the_message() {
        let error = GuardError::null_value("input");
        assert_eq!(error.to_string(), error.message());
    }

    #[test]
    fn test_aggregate_orders_causes_and_joins_parameters() {
        let combined = GuardError::aggregate(vec![
            GuardError::empty_string("email"),
            GuardError::out_of_range("age", 18, 60),
            GuardError::weak_secret("email"),
        ]);
        assert!(combined.is_aggregate());
        assert_eq!(combined.parameter(), "email, age");
        assert_eq!(combined.causes().len(), 3);
        assert_eq!(combined.causes()[1].parameter(), "age");
    }

    #[test]
    fn test_profile_not_found_is_distinct_from_guard_failures() {
        let miss = ProfileError::NotFound {
            name: "SafeUsername".into(),
            type_name: "alloc::string::String",
        };
        assert!(miss.is_not_found());

        let data: ProfileError = GuardError::empty_string("username").into();
        assert!(!data.is_not_found());
    }

    #[test]
    fn test_errors_round_trip_through_serde() {
        let error = GuardError::invalid_format("homepage", FormatKind::Url);
        let json = serde_json::to_string(&error).unwrap();
        let back: GuardError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, error);
    }
}
