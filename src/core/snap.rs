use chrono::NaiveDateTime;

use crate::core::primitives::{MS_PER_MINUTE, instant_to_unix_millis, unix_millis_to_instant};
use crate::error::{GanttError, GanttResult};

/// Rounds an instant to the nearest multiple of `minutes`, halves rounding up.
pub fn snap_to_minutes(instant: NaiveDateTime, minutes: u32) -> GanttResult<NaiveDateTime> {
    if minutes == 0 {
        return Err(GanttError::InvalidConfig(
            "snap granularity must be at least one minute".to_owned(),
        ));
    }
    let granularity = i64::from(minutes) * MS_PER_MINUTE;
    let millis = instant_to_unix_millis(instant);
    let snapped = (millis + granularity / 2).div_euclid(granularity) * granularity;
    unix_millis_to_instant(snapped)
}

/// Returns `true` when `instant` already sits on the `minutes` grid.
#[must_use]
pub fn is_on_grid(instant: NaiveDateTime, minutes: u32) -> bool {
    if minutes == 0 {
        return false;
    }
    let granularity = i64::from(minutes) * MS_PER_MINUTE;
    instant.and_utc().timestamp_subsec_nanos() % 1_000_000 == 0
        && instant_to_unix_millis(instant).rem_euclid(granularity) == 0
}
