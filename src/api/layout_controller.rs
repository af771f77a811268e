use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::{
    CoordinateMapper, LayoutState, LayoutTuning, Tick, ViewConfig, ViewPreset, ViewType, Viewport,
    ticks,
};
use crate::error::GanttResult;
use crate::render::Renderer;

use super::{FrameReport, FrameScheduler, GanttEngine, PluginEvent};

impl<R: Renderer> GanttEngine<R> {
    #[must_use]
    pub fn view_config(&self) -> ViewConfig {
        *self.layout.view_config()
    }

    #[must_use]
    pub fn layout_state(&self) -> Option<&LayoutState> {
        self.layout.state()
    }

    #[must_use]
    pub fn layout_tuning(&self) -> LayoutTuning {
        self.layout.tuning()
    }

    /// Mapper over the current layout, `None` until the viewport is measured.
    #[must_use]
    pub fn mapper(&self) -> Option<CoordinateMapper<'_>> {
        let tuning = self.layout.tuning();
        self.layout
            .state()
            .map(|state| CoordinateMapper::new(state, tuning.min_bar_width_px))
    }

    /// Applies a new view immediately. Returns `true` when the layout changed.
    pub fn set_view_config(&mut self, view: ViewConfig) -> bool {
        let changed = self.layout.set_view_config(view);
        debug!(
            view_type = ?view.view_type,
            preset = %view.preset,
            selected_date = %view.selected_date,
            changed,
            "set view config"
        );
        if changed {
            self.on_layout_changed();
        }
        changed
    }

    /// Switches view type; the preset resets to the new type's default.
    pub fn set_view_type(&mut self, view_type: ViewType) -> bool {
        let view = self.view_config().with_view_type(view_type);
        self.set_view_config(view)
    }

    pub fn set_preset(&mut self, preset: ViewPreset) -> bool {
        let view = self.view_config().with_preset(preset);
        self.set_view_config(view)
    }

    /// Decodes a preset display label such as `"12 Hours"`.
    pub fn set_preset_label(&mut self, label: &str) -> bool {
        let view = self.view_config().with_preset_label(label);
        self.set_view_config(view)
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) -> bool {
        let view = self.view_config().with_selected_date(date);
        self.set_view_config(view)
    }

    pub fn set_selected_month(&mut self, year: i32, month: u32) -> GanttResult<bool> {
        let view = self.view_config().with_selected_month(year, month)?;
        Ok(self.set_view_config(view))
    }

    pub fn set_layout_tuning(&mut self, tuning: LayoutTuning) -> GanttResult<bool> {
        let changed = self.layout.set_tuning(tuning)?;
        if changed {
            self.on_layout_changed();
        }
        Ok(changed)
    }

    /// Records a viewport measurement; applied at the next animation frame.
    pub fn request_resize(&mut self, viewport: Viewport) {
        self.frames.request_resize(viewport);
    }

    #[must_use]
    pub fn has_pending_frame_work(&self) -> bool {
        self.frames.has_pending_work()
    }

    #[must_use]
    pub fn frame_scheduler(&self) -> &FrameScheduler {
        &self.frames
    }

    /// Runs deferred work for one animation frame.
    ///
    /// A clamp scheduled by an earlier frame runs first; a pending resize then
    /// relayouts and schedules its own clamp for the following frame.
    pub fn on_animation_frame(&mut self) -> FrameReport {
        let mut report = FrameReport::default();

        if self.frames.take_clamp() {
            let offset = self.scroll.clamp_to_shared_range();
            trace!(offset, "frame clamp");
            report.clamped_offset_px = Some(offset);
        }

        if let Some(viewport) = self.frames.take_resize() {
            report.relayout = self.layout.set_viewport(viewport);
            trace!(width = viewport.width, relayout = report.relayout, "frame resize");
            if report.relayout {
                self.on_layout_changed();
            }
        }

        report
    }

    /// Ruler ticks for the current layout; empty until measured.
    #[must_use]
    pub fn ticks(&self) -> Vec<Tick> {
        self.layout
            .state()
            .map(|state| ticks(state, self.layout.view_config(), self.layout.tuning()))
            .unwrap_or_default()
    }

    fn on_layout_changed(&mut self) {
        let Some(state) = self.layout.state().copied() else {
            return;
        };
        self.scroll.apply_layout(&state);
        self.frames.schedule_clamp();
        self.emit_plugin_event(PluginEvent::LayoutChanged {
            content_width_px: state.content_width_px,
            scroll_enabled: state.scroll_enabled,
        });
    }
}
