//! Relative human time ("3 minutes ago", "in a day").
//!
//! Thresholds follow the common `fromNow` convention: the elapsed time is
//! rounded in every unit, and the next unit takes over once the rounded value
//! reaches its threshold (45 s, 45 min, 22 h, 26 d, 11 months).

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

use time::OffsetDateTime;

const SECONDS_THRESHOLD: i64 = 45;
const MINUTES_THRESHOLD: i64 = 45;
const HOURS_THRESHOLD: i64 = 22;
const DAYS_THRESHOLD: i64 = 26;
const MONTHS_THRESHOLD: i64 = 11;

/// Current wall-clock time.
#[must_use]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Describe `then` relative to `now`.
#[must_use]
pub fn format_relative(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let delta_ms = i64::try_from((then - now).whole_milliseconds()).unwrap_or(i64::MAX);
    let phrase = duration_phrase(delta_ms.unsigned_abs());
    if delta_ms > 0 { format!("in {phrase}") } else { format!("{phrase} ago") }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn duration_phrase(abs_ms: u64) -> String {
    let ms = abs_ms as f64;
    let seconds = (ms / 1000.0).round() as i64;
    let minutes = (ms / 60_000.0).round() as i64;
    let hours = (ms / 3_600_000.0).round() as i64;
    let exact_days = ms / 86_400_000.0;
    let days = exact_days.round() as i64;
    // Average Gregorian month: 146097 days per 4800 months.
    let exact_months = exact_days * 4800.0 / 146_097.0;
    let months = exact_months.round() as i64;
    let years = (exact_months / 12.0).round() as i64;

    if seconds < SECONDS_THRESHOLD {
        "a few seconds".to_owned()
    } else if minutes <= 1 {
        "a minute".to_owned()
    } else if minutes < MINUTES_THRESHOLD {
        format!("{minutes} minutes")
    } else if hours <= 1 {
        "an hour".to_owned()
    } else if hours < HOURS_THRESHOLD {
        format!("{hours} hours")
    } else if days <= 1 {
        "a day".to_owned()
    } else if days < DAYS_THRESHOLD {
        format!("{days} days")
    } else if months <= 1 {
        "a month".to_owned()
    } else if months < MONTHS_THRESHOLD {
        format!("{months} months")
    } else if years <= 1 {
        "a year".to_owned()
    } else {
        format!("{years} years")
    }
}
