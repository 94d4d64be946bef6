use super::*;
use time::Duration;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2024-05-01 12:00:00 UTC);

fn ago(delta: Duration) -> String {
    format_relative(NOW - delta, NOW)
}

// =============================================================
// Past
// =============================================================

#[test]
fn same_instant_is_a_few_seconds_ago() {
    assert_eq!(format_relative(NOW, NOW), "a few seconds ago");
}

#[test]
fn seconds_below_threshold() {
    assert_eq!(ago(Duration::seconds(44)), "a few seconds ago");
}

#[test]
fn seconds_threshold_rolls_to_a_minute() {
    assert_eq!(ago(Duration::seconds(45)), "a minute ago");
    assert_eq!(ago(Duration::seconds(89)), "a minute ago");
}

#[test]
fn minutes_are_counted() {
    assert_eq!(ago(Duration::seconds(90)), "2 minutes ago");
    assert_eq!(ago(Duration::minutes(3)), "3 minutes ago");
    assert_eq!(ago(Duration::minutes(44)), "44 minutes ago");
}

#[test]
fn minutes_threshold_rolls_to_an_hour() {
    assert_eq!(ago(Duration::minutes(45)), "an hour ago");
}

#[test]
fn hours_are_counted() {
    assert_eq!(ago(Duration::minutes(90)), "2 hours ago");
    assert_eq!(ago(Duration::hours(21)), "21 hours ago");
}

#[test]
fn hours_threshold_rolls_to_a_day() {
    assert_eq!(ago(Duration::hours(22)), "a day ago");
    assert_eq!(ago(Duration::hours(36)), "2 days ago");
}

#[test]
fn days_and_months() {
    assert_eq!(ago(Duration::days(25)), "25 days ago");
    assert_eq!(ago(Duration::days(26)), "a month ago");
    assert_eq!(ago(Duration::days(45)), "a month ago");
    assert_eq!(ago(Duration::days(46)), "2 months ago");
}

#[test]
fn months_roll_to_years() {
    assert_eq!(ago(Duration::days(320)), "a year ago");
    assert_eq!(ago(Duration::days(547)), "a year ago");
    assert_eq!(ago(Duration::days(548)), "2 years ago");
    assert_eq!(ago(Duration::days(3650)), "10 years ago");
}

// =============================================================
// Future
// =============================================================

#[test]
fn future_times_use_in_prefix() {
    assert_eq!(format_relative(NOW + Duration::minutes(5), NOW), "in 5 minutes");
    assert_eq!(format_relative(NOW + Duration::days(1), NOW), "in a day");
}
