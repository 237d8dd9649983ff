//! Numeric guards
//!
//! Comparison checks over ordered values. Range bounds are always inclusive;
//! a range whose `min` exceeds its `max` is unsatisfiable and the guard
//! fails for every value.

use std::fmt::Display;

use crate::core::error::{GuardError, GuardResult, NumericKind};

/// Numeric types that have a zero, for the sign guards.
///
/// Implemented for the primitive integer and float types.
pub trait Zeroed {
    /// The additive identity for this type.
    fn zero() -> Self;
}

macro_rules! impl_zeroed {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(impl Zeroed for $ty {
            fn zero() -> Self {
                $zero
            }
        })*
    };
}

impl_zeroed! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
}

/// Fails with [`OutOfRange`] when `value < min || value > max`.
///
/// Bounds are inclusive: `value == min` and `value == max` both pass.
/// Ordering the bounds is the caller's responsibility; when `min > max` no
/// value satisfies both inequalities and the guard always fails.
///
/// The check is a pair of `PartialOrd` comparisons, and a float `NaN`
/// compares false against both bounds, so `NaN` passes every range. Reject
/// it separately ([`integer`] does, or an explicit `is_nan` check) when a
/// parameter must be an actual number.
///
/// [`OutOfRange`]: crate::core::error::GuardErrorKind::OutOfRange
///
/// # Examples
///
/// ```
/// use orion_guard::guards::numeric::in_range;
///
/// assert!(in_range(25, 18, 60, "age").is_ok());
/// assert!(in_range(17, 18, 60, "age").is_err());
/// ```
pub fn in_range<T>(value: T, min: T, max: T, parameter: &str) -> GuardResult<()>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err(GuardError::out_of_range(parameter, min, max));
    }
    Ok(())
}

/// Fails with [`Numeric(TooSmall)`] when `value < min`.
///
/// [`Numeric(TooSmall)`]: crate::core::error::NumericKind::TooSmall
pub fn at_least<T>(value: T, min: T, parameter: &str) -> GuardResult<()>
where
    T: PartialOrd + Display + Copy,
{
    if value < min {
        return Err(GuardError::numeric(
            NumericKind::TooSmall,
            parameter,
            format!("`{parameter}` must be at least {min}"),
        ));
    }
    Ok(())
}

/// Fails with [`Numeric(TooLarge)`] when `value > max`.
///
/// [`Numeric(TooLarge)`]: crate::core::error::NumericKind::TooLarge
pub fn at_most<T>(value: T, max: T, parameter: &str) -> GuardResult<()>
where
    T: PartialOrd + Display + Copy,
{
    if value > max {
        return Err(GuardError::numeric(
            NumericKind::TooLarge,
            parameter,
            format!("`{parameter}` must be at most {max}"),
        ));
    }
    Ok(())
}

/// Fails with [`Numeric(Negative)`] when `value < 0`.
///
/// [`Numeric(Negative)`]: crate::core::error::NumericKind::Negative
pub fn not_negative<T>(value: T, parameter: &str) -> GuardResult<()>
where
    T: PartialOrd + Display + Copy + Zeroed,
{
    if value < T::zero() {
        return Err(GuardError::numeric(
            NumericKind::Negative,
            parameter,
            format!("`{parameter}` must not be negative"),
        ));
    }
    Ok(())
}

/// Fails with [`Numeric(Zero)`] when `value == 0`.
///
/// [`Numeric(Zero)`]: crate::core::error::NumericKind::Zero
pub fn not_zero<T>(value: T, parameter: &str) -> GuardResult<()>
where
    T: PartialEq + Copy + Zeroed,
{
    if value == T::zero() {
        return Err(GuardError::numeric(
            NumericKind::Zero,
            parameter,
            format!("`{parameter}` must not be zero"),
        ));
    }
    Ok(())
}

/// Fails with [`Numeric(NotInteger)`] when the value has a fractional part.
///
/// `NaN` never has an integral value and always fails.
///
/// [`Numeric(NotInteger)`]: crate::core::error::NumericKind::NotInteger
pub fn integer(value: f64, parameter: &str) -> GuardResult<()> {
    if value.fract() != 0.0 {
        return Err(GuardError::numeric(
            NumericKind::NotInteger,
            parameter,
            format!("`{parameter}` must be an integer"),
        ));
    }
    Ok(())
}

/// Fails with [`OutOfRange`] when the value is not a valid TCP/UDP port.
///
/// [`OutOfRange`]: crate::core::error::GuardErrorKind::OutOfRange
pub fn port(value: i64, parameter: &str) -> GuardResult<()> {
    in_range(value, 0, 65_535, parameter)
}
