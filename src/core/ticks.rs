use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::core::layout::{LayoutState, LayoutTuning};
use crate::core::time_anchor::TimeUnit;
use crate::core::view::{ViewConfig, ViewType};

/// Horizontal label alignment relative to the tick position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    /// First or last edge of the span.
    Boundary,
    /// Interior unit boundary.
    Major,
    /// Unlabeled half-unit mark.
    Minor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub x: f64,
    pub label: Option<String>,
    pub align: TickAlign,
    pub kind: TickKind,
}

impl Tick {
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.kind == TickKind::Boundary
    }
}

/// Ruler ticks for a layout, ordered by x.
///
/// Emits `total_units + 1` labeled edge ticks at `index * pixels_per_unit`,
/// plus unlabeled half-hour ticks in the hour view once units are wide enough.
#[must_use]
pub fn ticks(layout: &LayoutState, view: &ViewConfig, tuning: LayoutTuning) -> Vec<Tick> {
    let total = layout.total_units;
    let with_minor = view.view_type == ViewType::Hour
        && layout.unit == TimeUnit::Hour
        && layout.pixels_per_unit >= tuning.minor_tick_min_px_per_unit;

    let capacity = total as usize + 1 + if with_minor { total as usize } else { 0 };
    let mut out = Vec::with_capacity(capacity);

    for index in 0..=total {
        let x = tick_x(index, layout);
        let (align, kind) = if index == 0 {
            (TickAlign::Left, TickKind::Boundary)
        } else if index == total {
            (TickAlign::Right, TickKind::Boundary)
        } else {
            (TickAlign::Center, TickKind::Major)
        };
        out.push(Tick {
            x,
            label: Some(tick_label(index, layout, view)),
            align,
            kind,
        });

        if with_minor && index < total {
            out.push(Tick {
                x: x + layout.pixels_per_unit * 0.5,
                label: None,
                align: TickAlign::Center,
                kind: TickKind::Minor,
            });
        }
    }

    out
}

/// Content x of the unit boundary `index`.
#[must_use]
pub fn tick_x(index: u32, layout: &LayoutState) -> f64 {
    f64::from(index) * layout.pixels_per_unit
}

/// Center of the unit cell starting at boundary `index`.
#[must_use]
pub fn cell_label_x(index: u32, layout: &LayoutState) -> f64 {
    (f64::from(index) + 0.5) * layout.pixels_per_unit
}

fn tick_label(index: u32, layout: &LayoutState, view: &ViewConfig) -> String {
    let total = layout.total_units;
    match view.view_type {
        ViewType::Hour => {
            if index == total {
                format!("{total:02}:00")
            } else {
                format!("{index:02}")
            }
        }
        ViewType::Week => {
            // The end cap repeats the last day's name.
            let day = if index == total {
                index.saturating_sub(1)
            } else {
                index
            };
            weekday_short_name(day_weekday(day)).to_owned()
        }
        ViewType::Month => {
            let day = if index == total { total } else { index + 1 };
            day.to_string()
        }
    }
}

fn day_weekday(offset_from_monday: u32) -> Weekday {
    let mut weekday = Weekday::Mon;
    for _ in 0..(offset_from_monday % 7) {
        weekday = weekday.succ();
    }
    weekday
}

#[must_use]
pub fn weekday_short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
