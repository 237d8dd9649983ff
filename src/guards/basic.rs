//! Basic guards
//!
//! Presence, boolean, membership, and custom-condition checks, plus the
//! explicit uninitialized-field scan. These are the guards that are not
//! specific to any one value category.

use std::fmt::Display;

use crate::core::error::{GuardError, GuardResult};

/// Fails with [`NullValue`] when the value is absent; unwraps it otherwise.
///
/// [`NullValue`]: crate::core::error::GuardErrorKind::NullValue
///
/// # Examples
///
/// ```
/// use orion_guard::guards::basic::required;
///
/// let name: Option<&str> = Some("ada");
/// assert_eq!(required(name.as_ref(), "name").unwrap(), &"ada");
/// assert!(required::<&str>(None, "name").is_err());
/// ```
pub fn required<'a, T: ?Sized>(value: Option<&'a T>, parameter: &str) -> GuardResult<&'a T> {
    value.ok_or_else(|| GuardError::null_value(parameter))
}

/// Fails with the supplied error when `condition` is true.
///
/// The generic escape hatch: build any [`GuardError`] and fail on an
/// arbitrary condition.
pub fn against(condition: bool, error: GuardError) -> GuardResult<()> {
    if condition { Err(error) } else { Ok(()) }
}

/// Fails when the value is false.
pub fn is_true(value: bool, parameter: &str) -> GuardResult<()> {
    against(
        !value,
        GuardError::custom(
            "must-be-true",
            parameter,
            format!("`{parameter}` must be true"),
        ),
    )
}

/// Fails when the value is true.
pub fn is_false(value: bool, parameter: &str) -> GuardResult<()> {
    against(
        value,
        GuardError::custom(
            "must-be-false",
            parameter,
            format!("`{parameter}` must be false"),
        ),
    )
}

/// Fails when the value is not a member of `allowed`.
///
/// The statically-typed replacement for an enum-definedness check: list the
/// values a parameter may take and reject everything else.
pub fn one_of<T>(value: &T, allowed: &[T], parameter: &str) -> GuardResult<()>
where
    T: PartialEq + Display,
{
    if !allowed.contains(value) {
        return Err(GuardError::custom(
            "not-in-set",
            parameter,
            format!("`{parameter}` must be one of the allowed values, got `{value}`"),
        ));
    }
    Ok(())
}

/// Fails with a custom error when the predicate rejects the value.
///
/// `description` finishes the sentence "`parameter` must ...".
pub fn satisfies<T: ?Sized>(
    value: &T,
    predicate: impl FnOnce(&T) -> bool,
    parameter: &str,
    description: &str,
) -> GuardResult<()> {
    if !predicate(value) {
        return Err(GuardError::custom(
            "condition",
            parameter,
            format!("`{parameter}` must {description}"),
        ));
    }
    Ok(())
}

/// Fails with [`UninitializedField`] naming the first field whose is-set
/// flag is false.
///
/// The caller supplies explicit `(field name, is set)` pairs; there is no
/// runtime introspection of the record.
///
/// [`UninitializedField`]: crate::core::error::GuardErrorKind::UninitializedField
///
/// # Examples
///
/// ```
/// use orion_guard::guards::basic::all_initialized;
///
/// struct Profile {
///     name: Option<String>,
///     email: Option<String>,
/// }
///
/// let profile = Profile { name: Some("ada".into()), email: None };
/// let result = all_initialized(
///     [
///         ("name", profile.name.is_some()),
///         ("email", profile.email.is_some()),
///     ],
///     "profile",
/// );
/// assert!(result.is_err());
/// ```
pub fn all_initialized<'a>(
    fields: impl IntoIterator<Item = (&'a str, bool)>,
    parameter: &str,
) -> GuardResult<()> {
    for (field, is_set) in fields {
        if !is_set {
            return Err(GuardError::uninitialized_field(parameter, field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GuardErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_unwraps_present_values() {
        let value = Some(42);
        assert_eq!(required(value.as_ref(), "answer").unwrap(), &42);
    }

    #[test]
    fn test_required_rejects_absent_values() {
        let error = required::<i32>(None, "answer").unwrap_err();
        assert_eq!(error.kind(), &GuardErrorKind::NullValue);
        assert_eq!(error.parameter(), "answer");
    }

    #[test]
    fn test_against_is_a_passthrough() {
        assert!(against(false, GuardError::null_value("p")).is_ok());
        let error = against(true, GuardError::weak_secret("p")).unwrap_err();
        assert_eq!(error.kind(), &GuardErrorKind::WeakSecret);
    }

    #[test]
    fn test_boolean_guards() {
        assert!(is_true(true, "flag").is_ok());
        assert!(is_true(false, "flag").is_err());
        assert!(is_false(false, "flag").is_ok());
        assert!(is_false(true, "flag").is_err());
    }

    #[test]
    fn test_one_of() {
        assert!(one_of(&"eu-west-1", &["eu-west-1", "us-east-1"], "region").is_ok());
        assert!(one_of(&"mars-1", &["eu-west-1", "us-east-1"], "region").is_err());
    }

    #[test]
    fn test_satisfies_builds_the_message() {
        let error = satisfies(&7, |n| n % 2 == 0, "workers", "be even").unwrap_err();
        assert_eq!(error.message(), "`workers` must be even");
    }

    #[test]
    fn test_all_initialized_names_the_first_unset_field() {
        let error = all_initialized(
            [("name", true), ("email", false), ("phone", false)],
            "profile",
        )
        .unwrap_err();
        assert_eq!(error.kind(), &GuardErrorKind::UninitializedField);
        assert!(error.message().contains("email"));

        assert!(all_initialized([("name", true)], "profile").is_ok());
    }
}
