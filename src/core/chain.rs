//! Fluent guard chains
//!
//! A chain binds one subject value to one parameter name and runs guard
//! steps against it in order. Steps live on `GuardResult<GuardChain<..>>`
//! so a whole chain is a single expression: the first failing step turns
//! the chain into an `Err`, and every later step is skipped without its
//! check logic running.
//!
//! Steps are only available where they type-check. String steps exist on
//! chains over string-like values, ordered steps on chains over ordered
//! values; there is no silent no-op for an inapplicable step.
//!
//! # Examples
//!
//! ```
//! use orion_guard::core::chain::{chain_of, ChainExt, StrChainExt};
//!
//! let username = "ada_lovelace";
//! chain_of(username, "username")
//!     .not_empty()
//!     .length(3, 20)
//!     .finish()
//!     .unwrap();
//! ```

use std::fmt::Display;

use regex::Regex;

use crate::core::error::{GuardError, GuardResult, NumericKind};
use crate::guards::numeric::Zeroed;
use crate::guards::{basic, format, numeric, string};

// ============================================================================
// CHAIN
// ============================================================================

/// A validation chain bound to one subject and its parameter name.
///
/// The subject is only ever read; a chain lives for one validation
/// expression and carries no state across expressions.
#[derive(Debug, Clone, Copy)]
pub struct GuardChain<'a, T: ?Sized> {
    value: &'a T,
    parameter: &'a str,
}

impl<'a, T: ?Sized> GuardChain<'a, T> {
    /// The subject value.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// The parameter name used in failure messages.
    pub fn parameter(&self) -> &'a str {
        self.parameter
    }
}

/// Starts a chain over `value`.
pub fn chain_of<'a, T: ?Sized>(value: &'a T, parameter: &'a str) -> GuardResult<GuardChain<'a, T>> {
    Ok(GuardChain { value, parameter })
}

/// Starts a chain over an optional value, failing with [`NullValue`] when
/// it is absent.
///
/// [`NullValue`]: crate::core::error::GuardErrorKind::NullValue
pub fn chain_required<'a, T: ?Sized>(
    value: Option<&'a T>,
    parameter: &'a str,
) -> GuardResult<GuardChain<'a, T>> {
    match value {
        Some(value) => Ok(GuardChain { value, parameter }),
        None => Err(GuardError::null_value(parameter)),
    }
}

// ============================================================================
// GENERIC STEPS
// ============================================================================

/// Steps available on every chain.
pub trait ChainExt<'a, T: ?Sized>: Sized {
    /// Runs any atomic guard (or closure with the same shape) against the
    /// chained value.
    fn check(self, guard: impl FnOnce(&T, &str) -> GuardResult<()>) -> Self;

    /// Fails with a custom condition error when the predicate rejects the
    /// value. `description` finishes the sentence "`parameter` must ...".
    fn satisfies(self, predicate: impl FnOnce(&T) -> bool, description: &str) -> Self;

    /// Ends the chain, discarding the subject.
    fn finish(self) -> GuardResult<()>;
}

impl<'a, T: ?Sized> ChainExt<'a, T> for GuardResult<GuardChain<'a, T>> {
    fn check(self, guard: impl FnOnce(&T, &str) -> GuardResult<()>) -> Self {
        self.and_then(|chain| {
            guard(chain.value, chain.parameter)?;
            Ok(chain)
        })
    }

    fn satisfies(self, predicate: impl FnOnce(&T) -> bool, description: &str) -> Self {
        self.and_then(|chain| {
            basic::satisfies(chain.value, predicate, chain.parameter, description)?;
            Ok(chain)
        })
    }

    fn finish(self) -> GuardResult<()> {
        self.map(|_| ())
    }
}

// ============================================================================
// STRING STEPS
// ============================================================================

/// Steps available on chains over string-like values.
pub trait StrChainExt<'a, T: ?Sized>: Sized {
    /// See [`string::not_empty`].
    fn not_empty(self) -> Self;
    /// See [`string::length`].
    fn length(self, min: usize, max: usize) -> Self;
    /// See [`string::exact_length`].
    fn exact_length(self, expected: usize) -> Self;
    /// See [`string::matches`].
    fn matches(self, pattern: &Regex) -> Self;
    /// See [`string::alphanumeric`].
    fn alphanumeric(self) -> Self;
    /// See [`format::email`].
    fn email(self) -> Self;
    /// See [`format::url`].
    fn url(self) -> Self;
    /// See [`string::strong_password`].
    fn strong_password(self) -> Self;
}

impl<'a, T> StrChainExt<'a, T> for GuardResult<GuardChain<'a, T>>
where
    T: AsRef<str> + ?Sized,
{
    fn not_empty(self) -> Self {
        self.check(|value, parameter| string::not_empty(value.as_ref(), parameter))
    }

    fn length(self, min: usize, max: usize) -> Self {
        self.check(|value, parameter| string::length(value.as_ref(), min, max, parameter))
    }

    fn exact_length(self, expected: usize) -> Self {
        self.check(|value, parameter| string::exact_length(value.as_ref(), expected, parameter))
    }

    fn matches(self, pattern: &Regex) -> Self {
        self.check(|value, parameter| string::matches(value.as_ref(), pattern, parameter))
    }

    fn alphanumeric(self) -> Self {
        self.check(|value, parameter| string::alphanumeric(value.as_ref(), parameter))
    }

    fn email(self) -> Self {
        self.check(|value, parameter| format::email(value.as_ref(), parameter))
    }

    fn url(self) -> Self {
        self.check(|value, parameter| format::url(value.as_ref(), parameter))
    }

    fn strong_password(self) -> Self {
        self.check(|value, parameter| string::strong_password(value.as_ref(), parameter))
    }
}

// ============================================================================
// ORDERED STEPS
// ============================================================================

/// Steps available on chains over ordered, copyable values.
pub trait OrdChainExt<'a, T>: Sized
where
    T: PartialOrd + Display + Copy,
{
    /// Fails unless the value is strictly greater than `min`.
    fn greater_than(self, min: T) -> Self;
    /// Fails unless the value is strictly less than `max`.
    fn less_than(self, max: T) -> Self;
    /// See [`numeric::in_range`]. Bounds are inclusive.
    fn in_range(self, min: T, max: T) -> Self;
}

impl<'a, T> OrdChainExt<'a, T> for GuardResult<GuardChain<'a, T>>
where
    T: PartialOrd + Display + Copy,
{
    fn greater_than(self, min: T) -> Self {
        self.and_then(|chain| {
            if *chain.value <= min {
                return Err(GuardError::numeric(
                    NumericKind::TooSmall,
                    chain.parameter,
                    format!("`{}` must be greater than {min}", chain.parameter),
                ));
            }
            Ok(chain)
        })
    }

    fn less_than(self, max: T) -> Self {
        self.and_then(|chain| {
            if *chain.value >= max {
                return Err(GuardError::numeric(
                    NumericKind::TooLarge,
                    chain.parameter,
                    format!("`{}` must be less than {max}", chain.parameter),
                ));
            }
            Ok(chain)
        })
    }

    fn in_range(self, min: T, max: T) -> Self {
        self.check(|value, parameter| numeric::in_range(*value, min, max, parameter))
    }
}

/// Steps available on chains over numeric values with a zero.
pub trait NumChainExt<'a, T>: Sized
where
    T: PartialOrd + Display + Copy + Zeroed,
{
    /// See [`numeric::not_negative`].
    fn not_negative(self) -> Self;
    /// See [`numeric::not_zero`].
    fn not_zero(self) -> Self;
}

impl<'a, T> NumChainExt<'a, T> for GuardResult<GuardChain<'a, T>>
where
    T: PartialOrd + Display + Copy + Zeroed,
{
    fn not_negative(self) -> Self {
        self.check(|value, parameter| numeric::not_negative(*value, parameter))
    }

    fn not_zero(self) -> Self {
        self.check(|value, parameter| numeric::not_zero(*value, parameter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GuardErrorKind;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn test_chain_passes_through_all_steps() {
        let result = chain_of("ada_lovelace", "username")
            .not_empty()
            .length(3, 20)
            .finish();
        assert!(result.is_ok());
    }

    #[test]
    fn test_chain_reports_the_first_failure() {
        // Both the emptiness and the length step would fail; only the first
        // failure is observed.
        let error = chain_of("", "username")
            .not_empty()
            .length(3, 20)
            .finish()
            .unwrap_err();
        assert_eq!(error.kind(), &GuardErrorKind::EmptyString);
    }

    #[test]
    fn test_later_steps_never_run_after_a_failure() {
        let ran = Cell::new(false);
        let result = chain_of("", "username")
            .not_empty()
            .check(|_, _| {
                ran.set(true);
                Ok(())
            })
            .finish();
        assert!(result.is_err());
        assert!(!ran.get(), "a step after a failure must not execute");
    }

    #[test]
    fn test_chain_required() {
        let present = Some("ada");
        assert!(chain_required(present.as_deref(), "name").not_empty().finish().is_ok());

        let absent: Option<&str> = None;
        let error = chain_required(absent, "name").not_empty().finish().unwrap_err();
        assert_eq!(error.kind(), &GuardErrorKind::NullValue);
    }

    #[test]
    fn test_string_steps_work_on_owned_strings() {
        let email = String::from("ada@example.com");
        assert!(chain_of(&email, "email").not_empty().email().finish().is_ok());
    }

    #[test]
    fn test_ordered_steps_are_strict() {
        let age = 21;
        assert!(chain_of(&age, "age").greater_than(18).less_than(60).finish().is_ok());
        // Boundary values fail the strict comparisons.
        let at_min = 18;
        assert!(chain_of(&at_min, "age").greater_than(18).finish().is_err());
        let at_max = 60;
        assert!(chain_of(&at_max, "age").less_than(60).finish().is_err());
    }

    #[test]
    fn test_in_range_step_is_inclusive() {
        let age = 18;
        assert!(chain_of(&age, "age").in_range(18, 60).finish().is_ok());
    }

    #[test]
    fn test_numeric_zero_steps() {
        let balance = -5;
        let error = chain_of(&balance, "balance").not_negative().finish().unwrap_err();
        assert_eq!(
            error.kind(),
            &GuardErrorKind::Numeric(NumericKind::Negative)
        );
        let count = 0;
        assert!(chain_of(&count, "count").not_zero().finish().is_err());
    }

    #[test]
    fn test_satisfies_step() {
        let workers = 8;
        assert!(chain_of(&workers, "workers")
            .satisfies(|n| n % 2 == 0, "be even")
            .finish()
            .is_ok());
        let odd = 7;
        let error = chain_of(&odd, "workers")
            .satisfies(|n| n % 2 == 0, "be even")
            .finish()
            .unwrap_err();
        assert_eq!(error.message(), "`workers` must be even");
    }
}
