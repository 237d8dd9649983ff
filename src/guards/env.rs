//! Environment guards
//!
//! Checks over process environment variables. Delegates to [`std::env`].

use crate::core::error::{GuardError, GuardResult};

/// Fails when the environment variable is unset or empty.
///
/// The variable name doubles as the parameter name in the failure.
pub fn var_set(name: &str) -> GuardResult<()> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(()),
        _ => Err(GuardError::custom(
            "missing-env-var",
            name,
            format!("`{name}` is not set in the environment"),
        )),
    }
}
