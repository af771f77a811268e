use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::time_anchor::{TimeAnchor, TimeUnit};
use crate::core::types::Viewport;
use crate::core::view::ViewConfig;
use crate::error::{GanttError, GanttResult};

/// Geometry tuning shared by layout, mapping and tick generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutTuning {
    /// Pixels added past the rounded-up content width so the final boundary
    /// tick stays reachable by scrolling.
    pub content_pad_px: f64,
    /// Rendered bars never get narrower than this.
    pub min_bar_width_px: f64,
    /// Half-unit minor ticks appear once a unit is at least this wide.
    pub minor_tick_min_px_per_unit: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            content_pad_px: 2.0,
            min_bar_width_px: 24.0,
            minor_tick_min_px_per_unit: 40.0,
        }
    }
}

impl LayoutTuning {
    pub fn validate(self) -> GanttResult<Self> {
        if !self.content_pad_px.is_finite() || self.content_pad_px < 0.0 {
            return Err(GanttError::InvalidConfig(
                "content pad must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_bar_width_px.is_finite() || self.min_bar_width_px < 0.0 {
            return Err(GanttError::InvalidConfig(
                "minimum bar width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.minor_tick_min_px_per_unit.is_finite() || self.minor_tick_min_px_per_unit <= 0.0
        {
            return Err(GanttError::InvalidConfig(
                "minor tick threshold must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Derived pixel geometry for one view and viewport width.
///
/// Always replaced wholesale. `pixels_per_unit` is derived from the applied
/// `content_width_px`, so `pixels_per_unit * total_units` reproduces the
/// content width and ruler ticks line up with bar edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub anchor: NaiveDateTime,
    pub unit: TimeUnit,
    pub total_units: u32,
    pub visible_units: u32,
    pub pixels_per_unit: f64,
    pub content_width_px: f64,
    pub viewport_width_px: f64,
    pub scroll_enabled: bool,
}

impl LayoutState {
    #[must_use]
    pub fn time_anchor(&self) -> TimeAnchor {
        TimeAnchor {
            anchor: self.anchor,
            total_units: self.total_units,
            unit: self.unit,
        }
    }

    #[must_use]
    pub fn unit_duration_ms(&self) -> f64 {
        self.unit.duration_ms() as f64
    }

    /// Largest horizontal scroll offset the content allows inside the viewport.
    #[must_use]
    pub fn max_scroll_offset_px(&self) -> f64 {
        if self.scroll_enabled {
            (self.content_width_px - self.viewport_width_px).max(0.0)
        } else {
            0.0
        }
    }
}

/// Computes layout geometry for a view at the given viewport width.
///
/// An unmeasured viewport (zero, negative or non-finite width) is rejected
/// instead of producing non-finite geometry.
pub fn compute_layout(
    config: &ViewConfig,
    viewport: Viewport,
    tuning: LayoutTuning,
) -> GanttResult<LayoutState> {
    if !viewport.is_valid() {
        return Err(GanttError::InvalidViewport {
            width: viewport.width,
        });
    }

    let anchor = TimeAnchor::for_view(config);
    let total_units = anchor.total_units;
    let visible_units = match config.preset.visible_units(config.view_type, total_units) {
        Some(visible) if visible > 0 => visible,
        _ => {
            warn!(
                preset = %config.preset,
                view_type = ?config.view_type,
                "preset does not match view type, showing the full span"
            );
            total_units
        }
    };

    let ratio = f64::from(total_units) / f64::from(visible_units);
    let content_width_px = (viewport.width * ratio).ceil() + tuning.content_pad_px;
    let pixels_per_unit = content_width_px / f64::from(total_units);

    let state = LayoutState {
        anchor: anchor.anchor,
        unit: anchor.unit,
        total_units,
        visible_units,
        pixels_per_unit,
        content_width_px,
        viewport_width_px: viewport.width,
        scroll_enabled: visible_units < total_units,
    };
    trace!(
        total_units,
        visible_units,
        pixels_per_unit,
        content_width_px,
        "computed layout"
    );
    Ok(state)
}

/// Stateful layout service owned by one chart instance.
///
/// Holds the latest view config and viewport width and the layout derived from
/// them. Recomputations with an unready viewport keep the previous state.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    tuning: LayoutTuning,
    view: ViewConfig,
    viewport: Option<Viewport>,
    state: Option<LayoutState>,
}

impl LayoutEngine {
    #[must_use]
    pub fn new(view: ViewConfig, tuning: LayoutTuning) -> Self {
        Self {
            tuning,
            view,
            viewport: None,
            state: None,
        }
    }

    #[must_use]
    pub fn view_config(&self) -> &ViewConfig {
        &self.view
    }

    #[must_use]
    pub fn tuning(&self) -> LayoutTuning {
        self.tuning
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[must_use]
    pub fn state(&self) -> Option<&LayoutState> {
        self.state.as_ref()
    }

    /// Replaces the view config. Returns `true` when the layout changed.
    pub fn set_view_config(&mut self, view: ViewConfig) -> bool {
        self.view = view;
        self.recompute()
    }

    /// Records a viewport measurement. Returns `true` when the layout changed.
    ///
    /// Unready measurements are ignored and leave the current state untouched.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if !viewport.is_valid() {
            debug!(width = viewport.width, "deferring layout until viewport is measured");
            return false;
        }
        self.viewport = Some(viewport);
        self.recompute()
    }

    pub fn set_tuning(&mut self, tuning: LayoutTuning) -> GanttResult<bool> {
        self.tuning = tuning.validate()?;
        Ok(self.recompute())
    }

    /// Re-derives the layout from the stored inputs.
    ///
    /// Returns `true` when the resulting state differs from the previous one.
    pub fn recompute(&mut self) -> bool {
        let Some(viewport) = self.viewport else {
            return false;
        };
        match compute_layout(&self.view, viewport, self.tuning) {
            Ok(next) => {
                let changed = self.state.as_ref() != Some(&next);
                if changed {
                    debug!(
                        view_type = ?self.view.view_type,
                        preset = %self.view.preset,
                        content_width_px = next.content_width_px,
                        scroll_enabled = next.scroll_enabled,
                        "layout changed"
                    );
                }
                self.state = Some(next);
                changed
            }
            Err(err) => {
                warn!(error = %err, "keeping previous layout");
                false
            }
        }
    }
}
