use chrono::{Duration, NaiveDateTime};

use crate::error::{GanttError, GanttResult};

pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;

/// Signed distance `to - from` in fractional milliseconds.
#[must_use]
pub fn millis_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    let delta = to - from;
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64,
    }
}

/// Offsets an instant by fractional milliseconds, rounded at nanosecond resolution.
pub fn add_millis(instant: NaiveDateTime, millis: f64) -> GanttResult<NaiveDateTime> {
    if !millis.is_finite() {
        return Err(GanttError::InvalidData(
            "time offset must be finite".to_owned(),
        ));
    }
    let nanos = (millis * 1_000_000.0).round();
    if nanos.abs() >= i64::MAX as f64 {
        return Err(GanttError::InvalidData(
            "time offset is out of range".to_owned(),
        ));
    }
    instant
        .checked_add_signed(Duration::nanoseconds(nanos as i64))
        .ok_or_else(|| GanttError::InvalidData("time offset is out of range".to_owned()))
}

#[must_use]
pub fn instant_to_unix_millis(instant: NaiveDateTime) -> i64 {
    instant.and_utc().timestamp_millis()
}

pub fn unix_millis_to_instant(millis: i64) -> GanttResult<NaiveDateTime> {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|value| value.naive_utc())
        .ok_or_else(|| GanttError::InvalidData(format!("timestamp {millis} is out of range")))
}
