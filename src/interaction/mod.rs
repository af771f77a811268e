//! Pointer-driven task manipulation.

mod controller;
mod sink;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::core::{Task, TimeUnit};
use crate::error::{GanttError, GanttResult};

pub use controller::InteractionController;
pub use sink::{TaskEvent, TaskEventSink, UpdatePhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragMode {
    Idle,
    Moving,
    ResizingStart,
    ResizingEnd,
}

impl DragMode {
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Tuning for hit testing, row mapping, clamping and commit snapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionTuning {
    /// Width of the resize hit zone at either bar edge.
    pub edge_hit_zone_px: f64,
    pub row_height_px: f64,
    /// Commit-time snap granularity.
    pub snap_minutes: u32,
    pub min_duration_hour_view_ms: i64,
    pub min_duration_day_view_ms: i64,
    pub tooltip_offset_x_px: f64,
    pub tooltip_offset_y_px: f64,
}

impl Default for InteractionTuning {
    fn default() -> Self {
        Self {
            edge_hit_zone_px: 8.0,
            row_height_px: 40.0,
            snap_minutes: 5,
            // 30 minutes.
            min_duration_hour_view_ms: 1_800_000,
            // A tenth of a day.
            min_duration_day_view_ms: 8_640_000,
            tooltip_offset_x_px: 10.0,
            tooltip_offset_y_px: -30.0,
        }
    }
}

impl InteractionTuning {
    pub fn validate(self) -> GanttResult<Self> {
        if !self.edge_hit_zone_px.is_finite() || self.edge_hit_zone_px < 0.0 {
            return Err(GanttError::InvalidConfig(
                "edge hit zone must be finite and >= 0".to_owned(),
            ));
        }
        if !self.row_height_px.is_finite() || self.row_height_px <= 0.0 {
            return Err(GanttError::InvalidConfig(
                "row height must be finite and > 0".to_owned(),
            ));
        }
        if self.snap_minutes == 0 {
            return Err(GanttError::InvalidConfig(
                "snap granularity must be at least one minute".to_owned(),
            ));
        }
        if self.min_duration_hour_view_ms <= 0 || self.min_duration_day_view_ms <= 0 {
            return Err(GanttError::InvalidConfig(
                "minimum task durations must be > 0".to_owned(),
            ));
        }
        if !self.tooltip_offset_x_px.is_finite() || !self.tooltip_offset_y_px.is_finite() {
            return Err(GanttError::InvalidConfig(
                "tooltip offsets must be finite".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Shortest duration a resize may produce in the given unit.
    #[must_use]
    pub fn min_duration(self, unit: TimeUnit) -> TimeDelta {
        match unit {
            TimeUnit::Hour => TimeDelta::milliseconds(self.min_duration_hour_view_ms),
            TimeUnit::Day => TimeDelta::milliseconds(self.min_duration_day_view_ms),
        }
    }

    #[must_use]
    pub fn snap_granularity(self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.snap_minutes))
    }
}

/// Transient state of one gesture, alive from pointer-down to pointer-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub mode: DragMode,
    /// Task as it was when the gesture started.
    pub task: Task,
    /// Pointer x minus bar left at pointer-down.
    pub pointer_origin_offset_px: f64,
    pub live_start: NaiveDateTime,
    pub live_end: NaiveDateTime,
    pub live_resource_id: String,
}

impl DragState {
    #[must_use]
    pub fn task_id(&self) -> &str {
        &self.task.id
    }

    /// The task with the in-progress range and row applied.
    #[must_use]
    pub fn live_task(&self) -> Task {
        self.task
            .with_range(self.live_start, self.live_end)
            .with_resource(self.live_resource_id.clone())
    }
}

/// Presentation of the in-progress range next to the pointer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DragTooltip {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl DragTooltip {
    pub(crate) fn show(&mut self, x: f64, y: f64, start: NaiveDateTime, end: NaiveDateTime) {
        self.visible = true;
        self.x = x;
        self.y = y;
        self.text = format_range(start, end);
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }
}

/// `dd/mm/yyyy HH:MM - dd/mm/yyyy HH:MM`
#[must_use]
pub fn format_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    const FORMAT: &str = "%d/%m/%Y %H:%M";
    format!("{} - {}", start.format(FORMAT), end.format(FORMAT))
}
