use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::layout::LayoutState;
use crate::core::primitives::{add_millis, millis_between};
use crate::core::types::Task;
use crate::error::{GanttError, GanttResult};

/// Horizontal placement of one bar in content pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left: f64,
    pub width: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        x >= self.left && x <= self.right()
    }
}

/// Converts between instants and content pixels for one layout.
///
/// The forward and inverse mappings share the same anchor and
/// `pixels_per_unit`; neither rounds independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper<'a> {
    layout: &'a LayoutState,
    min_bar_width_px: f64,
}

impl<'a> CoordinateMapper<'a> {
    #[must_use]
    pub fn new(layout: &'a LayoutState, min_bar_width_px: f64) -> Self {
        Self {
            layout,
            min_bar_width_px,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &'a LayoutState {
        self.layout
    }

    /// Content x coordinate of an instant.
    #[must_use]
    pub fn time_to_pixel(&self, instant: NaiveDateTime) -> f64 {
        self.duration_to_pixels(millis_between(self.layout.anchor, instant))
    }

    /// Rendered bar geometry. The width floor only affects presentation.
    #[must_use]
    pub fn to_pixels(&self, task: &Task) -> BarGeometry {
        let raw = self.to_pixels_unclamped(task);
        BarGeometry {
            left: raw.left,
            width: raw.width.max(self.min_bar_width_px),
        }
    }

    /// Bar geometry without the minimum width floor.
    ///
    /// Inverted ranges map as zero-duration tasks.
    #[must_use]
    pub fn to_pixels_unclamped(&self, task: &Task) -> BarGeometry {
        BarGeometry {
            left: self.time_to_pixel(task.start),
            width: self.duration_to_pixels(task.duration_ms()),
        }
    }

    /// Exact inverse of [`CoordinateMapper::time_to_pixel`].
    pub fn to_time(&self, pixel_left: f64) -> GanttResult<NaiveDateTime> {
        if !pixel_left.is_finite() {
            return Err(GanttError::InvalidData("pixel must be finite".to_owned()));
        }
        add_millis(self.layout.anchor, self.pixels_to_duration_ms(pixel_left))
    }

    #[must_use]
    pub fn duration_to_pixels(&self, millis: f64) -> f64 {
        millis / self.layout.unit_duration_ms() * self.layout.pixels_per_unit
    }

    #[must_use]
    pub fn pixels_to_duration_ms(&self, pixels: f64) -> f64 {
        pixels / self.layout.pixels_per_unit * self.layout.unit_duration_ms()
    }
}

/// Projects many tasks at once, preserving input order.
#[must_use]
pub fn project_bars(tasks: &[Task], mapper: CoordinateMapper<'_>) -> Vec<BarGeometry> {
    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;
        tasks.par_iter().map(|task| mapper.to_pixels(task)).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        tasks.iter().map(|task| mapper.to_pixels(task)).collect()
    }
}
