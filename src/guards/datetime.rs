//! Temporal guards
//!
//! Date and time checks. Every guard that needs "now" takes it as an
//! explicit reference instant so checks stay deterministic; pass
//! [`Utc::now()`] at the outermost call site.
//!
//! [`Utc::now()`]: chrono::Utc::now

use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};

use crate::core::error::{GuardError, GuardResult, TemporalKind};

/// Fails with [`Temporal(Past)`] when `date < now`.
///
/// [`Temporal(Past)`]: crate::core::error::TemporalKind::Past
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use orion_guard::guards::datetime::not_past;
///
/// let now = Utc::now();
/// assert!(not_past(now + Duration::days(1), now, "deadline").is_ok());
/// assert!(not_past(now - Duration::days(1), now, "deadline").is_err());
/// ```
pub fn not_past(date: DateTime<Utc>, now: DateTime<Utc>, parameter: &str) -> GuardResult<()> {
    if date < now {
        return Err(GuardError::temporal(
            TemporalKind::Past,
            parameter,
            format!("`{parameter}` must not be in the past"),
        ));
    }
    Ok(())
}

/// Fails with [`Temporal(Future)`] when `date > now`.
///
/// [`Temporal(Future)`]: crate::core::error::TemporalKind::Future
pub fn not_future(date: DateTime<Utc>, now: DateTime<Utc>, parameter: &str) -> GuardResult<()> {
    if date > now {
        return Err(GuardError::temporal(
            TemporalKind::Future,
            parameter,
            format!("`{parameter}` must not be in the future"),
        ));
    }
    Ok(())
}

/// Fails with [`Temporal(OutOfRange)`] when the instant is outside the
/// inclusive `[start, end]` window.
///
/// [`Temporal(OutOfRange)`]: crate::core::error::TemporalKind::OutOfRange
pub fn within(
    date: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    parameter: &str,
) -> GuardResult<()> {
    if date < start || date > end {
        return Err(GuardError::temporal(
            TemporalKind::OutOfRange,
            parameter,
            format!("`{parameter}` must be between {start} and {end}"),
        ));
    }
    Ok(())
}

/// Fails with [`Temporal(Weekend)`] when the date is a Saturday or Sunday.
///
/// [`Temporal(Weekend)`]: crate::core::error::TemporalKind::Weekend
pub fn not_weekend(date: DateTime<Utc>, parameter: &str) -> GuardResult<()> {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return Err(GuardError::temporal(
            TemporalKind::Weekend,
            parameter,
            format!("`{parameter}` must not fall on a weekend"),
        ));
    }
    Ok(())
}

/// Fails with [`Temporal(WrongDay)`] when the date is not on `day`.
///
/// [`Temporal(WrongDay)`]: crate::core::error::TemporalKind::WrongDay
pub fn on_day(date: DateTime<Utc>, day: Weekday, parameter: &str) -> GuardResult<()> {
    if date.weekday() != day {
        return Err(GuardError::temporal(
            TemporalKind::WrongDay,
            parameter,
            format!("`{parameter}` must fall on a {day}"),
        ));
    }
    Ok(())
}

/// Fails with [`Temporal(OutsideHours)`] when the time of day is outside
/// the inclusive `[start, end]` window.
///
/// [`Temporal(OutsideHours)`]: crate::core::error::TemporalKind::OutsideHours
pub fn within_hours(
    date: DateTime<Utc>,
    start: NaiveTime,
    end: NaiveTime,
    parameter: &str,
) -> GuardResult<()> {
    let time = date.time();
    if time < start || time > end {
        return Err(GuardError::temporal(
            TemporalKind::OutsideHours,
            parameter,
            format!("`{parameter}` must be between {start} and {end}"),
        ));
    }
    Ok(())
}

/// Fails with [`Temporal(NotToday)`] when the date is not the reference
/// instant's calendar date.
///
/// [`Temporal(NotToday)`]: crate::core::error::TemporalKind::NotToday
pub fn today(date: DateTime<Utc>, now: DateTime<Utc>, parameter: &str) -> GuardResult<()> {
    if date.date_naive() != now.date_naive() {
        return Err(GuardError::temporal(
            TemporalKind::NotToday,
            parameter,
            format!("`{parameter}` must be today's date"),
        ));
    }
    Ok(())
}

/// Oldest plausible age for a birth date, in years.
const MAX_AGE_YEARS: i32 = 130;

/// Fails with [`Temporal(UnrealisticBirthDate)`] when the date is in the
/// future or more than 130 calendar years before `now`.
///
/// [`Temporal(UnrealisticBirthDate)`]: crate::core::error::TemporalKind::UnrealisticBirthDate
pub fn realistic_birth_date(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    parameter: &str,
) -> GuardResult<()> {
    // The calendar date 130 years back; a Feb 29 reference falls back to the
    // day before, which exists in every year.
    let oldest = now
        .with_year(now.year() - MAX_AGE_YEARS)
        .or_else(|| (now - chrono::Duration::days(1)).with_year(now.year() - MAX_AGE_YEARS))
        .expect("the shifted calendar date exists");
    if date > now || date < oldest {
        return Err(GuardError::temporal(
            TemporalKind::UnrealisticBirthDate,
            parameter,
            format!("`{parameter}` must be a realistic birth date"),
        ));
    }
    Ok(())
}
