//! Hour-granularity date rules

use chrono::{DateTime, Timelike, Utc};

/// Floor a timestamp to the start of its hour
pub fn start_of_hour(at: DateTime<Utc>) -> DateTime<Utc> {
    at.with_nanosecond(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_minute(0))
        .unwrap_or(at)
}

/// Whether `date` falls in an hour that is already over at `now`.
///
/// Both sides are truncated, so any time inside the current hour is still
/// considered upcoming.
pub fn is_past_hour(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_of_hour(date) < start_of_hour(now)
}

/// Whether the hour containing `date` began before `now`.
///
/// Only `date` is truncated, so a time inside the current hour counts as
/// already started once that hour has begun.
pub fn starts_before(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_of_hour(date) < now
}
