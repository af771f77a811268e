use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

/// Time granularity family of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewType {
    Hour,
    Week,
    Month,
}

impl ViewType {
    /// Preset selected when the host switches to this view type.
    #[must_use]
    pub const fn default_preset(self) -> ViewPreset {
        match self {
            Self::Hour => ViewPreset::Hour(HourPreset::Hours24),
            Self::Week => ViewPreset::Week(WeekPreset::Full),
            Self::Month => ViewPreset::Month(MonthPreset::Full),
        }
    }

    /// All presets offered for this view type, in display order.
    #[must_use]
    pub fn presets(self) -> &'static [ViewPreset] {
        const HOUR: [ViewPreset; 5] = [
            ViewPreset::Hour(HourPreset::Hours4),
            ViewPreset::Hour(HourPreset::Hours6),
            ViewPreset::Hour(HourPreset::Hours12),
            ViewPreset::Hour(HourPreset::Hours18),
            ViewPreset::Hour(HourPreset::Hours24),
        ];
        const WEEK: [ViewPreset; 2] = [
            ViewPreset::Week(WeekPreset::Work),
            ViewPreset::Week(WeekPreset::Full),
        ];
        const MONTH: [ViewPreset; 3] = [
            ViewPreset::Month(MonthPreset::Days7),
            ViewPreset::Month(MonthPreset::Days14),
            ViewPreset::Month(MonthPreset::Full),
        ];
        match self {
            Self::Hour => &HOUR,
            Self::Week => &WEEK,
            Self::Month => &MONTH,
        }
    }

    /// Parses `hour`, `week` or `month` (case-insensitive).
    pub fn parse(input: &str) -> GanttResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "hour" => Ok(Self::Hour),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(GanttError::InvalidData(format!(
                "unknown view type `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourPreset {
    Hours4,
    Hours6,
    Hours12,
    Hours18,
    Hours24,
}

impl HourPreset {
    #[must_use]
    pub const fn visible_hours(self) -> u32 {
        match self {
            Self::Hours4 => 4,
            Self::Hours6 => 6,
            Self::Hours12 => 12,
            Self::Hours18 => 18,
            Self::Hours24 => 24,
        }
    }

    #[must_use]
    pub fn from_visible_hours(hours: u32) -> Option<Self> {
        match hours {
            4 => Some(Self::Hours4),
            6 => Some(Self::Hours6),
            12 => Some(Self::Hours12),
            18 => Some(Self::Hours18),
            24 => Some(Self::Hours24),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekPreset {
    /// Monday to Friday.
    Work,
    /// Monday to Sunday.
    Full,
}

impl WeekPreset {
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Work => 5,
            Self::Full => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthPreset {
    Days7,
    Days14,
    Full,
}

/// Visibility preset: how much of the full span fits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewPreset {
    Hour(HourPreset),
    Week(WeekPreset),
    Month(MonthPreset),
}

impl ViewPreset {
    #[must_use]
    pub const fn view_type(self) -> ViewType {
        match self {
            Self::Hour(_) => ViewType::Hour,
            Self::Week(_) => ViewType::Week,
            Self::Month(_) => ViewType::Month,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hour(HourPreset::Hours4) => "4 Hours",
            Self::Hour(HourPreset::Hours6) => "6 Hours",
            Self::Hour(HourPreset::Hours12) => "12 Hours",
            Self::Hour(HourPreset::Hours18) => "18 Hours",
            Self::Hour(HourPreset::Hours24) => "24 Hours",
            Self::Week(WeekPreset::Work) => "Work Week",
            Self::Week(WeekPreset::Full) => "Full Week",
            Self::Month(MonthPreset::Days7) => "7 Days",
            Self::Month(MonthPreset::Days14) => "14 Days",
            Self::Month(MonthPreset::Full) => "Full Month",
        }
    }

    /// Decodes a preset label for the given view type.
    ///
    /// Matching is lenient: hour labels are decoded from their leading number
    /// (`"12 Hours"`, `"12h"`), week labels by the `work`/`full` keyword and
    /// month labels by `full`, `14` or `7`. Returns `None` when nothing matches.
    #[must_use]
    pub fn from_label(view_type: ViewType, label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        match view_type {
            ViewType::Hour => leading_number(&normalized)
                .and_then(HourPreset::from_visible_hours)
                .map(Self::Hour),
            ViewType::Week => {
                if normalized.contains("work") {
                    Some(Self::Week(WeekPreset::Work))
                } else if normalized.contains("full") {
                    Some(Self::Week(WeekPreset::Full))
                } else {
                    None
                }
            }
            ViewType::Month => {
                if normalized.contains("full") {
                    Some(Self::Month(MonthPreset::Full))
                } else {
                    match leading_number(&normalized) {
                        Some(14) => Some(Self::Month(MonthPreset::Days14)),
                        Some(7) => Some(Self::Month(MonthPreset::Days7)),
                        _ => None,
                    }
                }
            }
        }
    }

    /// Resolves the visible unit count against the span's total units.
    ///
    /// Returns `None` when the preset belongs to a different view type.
    #[must_use]
    pub fn visible_units(self, view_type: ViewType, total_units: u32) -> Option<u32> {
        if self.view_type() != view_type {
            return None;
        }
        let visible = match self {
            Self::Hour(preset) => preset.visible_hours(),
            Self::Week(preset) => preset.days(),
            Self::Month(MonthPreset::Days7) => 7,
            Self::Month(MonthPreset::Days14) => 14,
            Self::Month(MonthPreset::Full) => total_units,
        };
        Some(visible.min(total_units))
    }
}

impl fmt::Display for ViewPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn leading_number(input: &str) -> Option<u32> {
    let digits: String = input
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// The single external input that drives anchor and layout computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewConfig {
    pub view_type: ViewType,
    pub preset: ViewPreset,
    pub selected_date: NaiveDate,
}

impl ViewConfig {
    /// Creates a config using the view type's default preset.
    #[must_use]
    pub fn new(view_type: ViewType, selected_date: NaiveDate) -> Self {
        Self {
            view_type,
            preset: view_type.default_preset(),
            selected_date,
        }
    }

    #[must_use]
    pub fn with_preset(mut self, preset: ViewPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Applies a preset label, falling back to the view type's default preset
    /// when the label cannot be decoded.
    #[must_use]
    pub fn with_preset_label(mut self, label: &str) -> Self {
        self.preset = ViewPreset::from_label(self.view_type, label).unwrap_or_else(|| {
            tracing::warn!(
                label,
                view_type = ?self.view_type,
                "unrecognized preset label, using full visibility"
            );
            self.view_type.default_preset()
        });
        self
    }

    /// Switches the view type and resets the preset to that type's default.
    #[must_use]
    pub fn with_view_type(mut self, view_type: ViewType) -> Self {
        self.view_type = view_type;
        self.preset = view_type.default_preset();
        self
    }

    #[must_use]
    pub fn with_selected_date(mut self, selected_date: NaiveDate) -> Self {
        self.selected_date = selected_date;
        self
    }

    /// Moves the selection to the first day of `year`/`month` (month is 1-based).
    pub fn with_selected_month(mut self, year: i32, month: u32) -> GanttResult<Self> {
        self.selected_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            GanttError::InvalidData(format!("invalid month selection {year}-{month:02}"))
        })?;
        Ok(self)
    }

    /// `YYYY-MM` value for month picker controls.
    #[must_use]
    pub fn selected_month_value(&self) -> String {
        format!(
            "{:04}-{:02}",
            self.selected_date.year(),
            self.selected_date.month()
        )
    }
}
