use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{MS_PER_DAY, MS_PER_HOUR, add_millis};
use crate::core::view::{ViewConfig, ViewPreset, ViewType, WeekPreset};
use crate::error::GanttResult;

/// Discrete granularity of one timeline unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Hour,
    Day,
}

impl TimeUnit {
    #[must_use]
    pub const fn duration_ms(self) -> i64 {
        match self {
            Self::Hour => MS_PER_HOUR,
            Self::Day => MS_PER_DAY,
        }
    }
}

/// Start of the full span plus its size in units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeAnchor {
    pub anchor: NaiveDateTime,
    pub total_units: u32,
    pub unit: TimeUnit,
}

impl TimeAnchor {
    /// Resolves the anchor instant and total unit count for a view.
    #[must_use]
    pub fn for_view(config: &ViewConfig) -> Self {
        let date = config.selected_date;
        match config.view_type {
            ViewType::Hour => Self {
                anchor: start_of_day(date),
                total_units: 24,
                unit: TimeUnit::Hour,
            },
            ViewType::Week => {
                let total_units = match config.preset {
                    ViewPreset::Week(preset) => preset.days(),
                    _ => WeekPreset::Full.days(),
                };
                Self {
                    anchor: start_of_day(iso_week_start(date)),
                    total_units,
                    unit: TimeUnit::Day,
                }
            }
            ViewType::Month => Self {
                anchor: start_of_day(first_of_month(date)),
                total_units: days_in_month(date),
                unit: TimeUnit::Day,
            },
        }
    }

    #[must_use]
    pub fn unit_duration_ms(&self) -> i64 {
        self.unit.duration_ms()
    }

    /// Total span length in milliseconds.
    #[must_use]
    pub fn span_ms(&self) -> f64 {
        f64::from(self.total_units) * self.unit_duration_ms() as f64
    }

    /// Exclusive end of the full span.
    pub fn span_end(&self) -> GanttResult<NaiveDateTime> {
        add_millis(self.anchor, self.span_ms())
    }

    /// Instant at the boundary `index` units past the anchor.
    pub fn unit_boundary(&self, index: u32) -> GanttResult<NaiveDateTime> {
        add_millis(
            self.anchor,
            f64::from(index) * self.unit_duration_ms() as f64,
        )
    }
}

#[must_use]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

/// Monday of the ISO week containing `date`.
#[must_use]
pub fn iso_week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Calendar length of the month containing `date`.
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Free-function form of [`TimeAnchor::for_view`].
#[must_use]
pub fn anchor(config: &ViewConfig) -> TimeAnchor {
    TimeAnchor::for_view(config)
}
