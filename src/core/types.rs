use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::primitives::millis_between;
use crate::error::{GanttError, GanttResult};

/// One schedulable row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
}

impl Resource {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Time-bound bar assigned to a resource row.
///
/// Instants are local wall-clock times of the chart. `start < end` is expected
/// from producers; mapping code tolerates violations without rendering negative
/// geometry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub resource_id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: String,
}

impl Task {
    /// Creates a task and rejects empty ids and inverted ranges.
    pub fn new(
        id: impl Into<String>,
        resource_id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        color: impl Into<String>,
    ) -> GanttResult<Self> {
        let task = Self {
            id: id.into(),
            resource_id: resource_id.into(),
            title: title.into(),
            start,
            end,
            color: color.into(),
        };
        task.validate()?;
        Ok(task)
    }

    pub fn validate(&self) -> GanttResult<()> {
        self.validate_identity()?;
        if !self.has_valid_range() {
            return Err(GanttError::InvalidData(format!(
                "task `{}` must start before it ends",
                self.id
            )));
        }
        Ok(())
    }

    /// Checks ids only; inverted ranges are tolerated.
    pub fn validate_identity(&self) -> GanttResult<()> {
        if self.id.is_empty() {
            return Err(GanttError::InvalidData("task id must not be empty".to_owned()));
        }
        if self.resource_id.is_empty() {
            return Err(GanttError::InvalidData(format!(
                "task `{}` has an empty resource id",
                self.id
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn has_valid_range(&self) -> bool {
        self.start < self.end
    }

    /// Duration in milliseconds, never negative.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        millis_between(self.start, self.end).max(0.0)
    }

    #[must_use]
    pub fn with_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_resource(&self, resource_id: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            ..self.clone()
        }
    }

    /// Returns `true` when the task intersects the half-open range `[from, to)`.
    #[must_use]
    pub fn overlaps(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        self.end > from && self.start < to
    }
}

/// Horizontal measurement of the pane that hosts the bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }
}
