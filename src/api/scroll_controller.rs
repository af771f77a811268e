use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::GanttResult;
use crate::render::Renderer;
use crate::scroll::{PaneId, ScrollCoordinator, ScrollOutcome, ScrollPane};

use super::{GanttEngine, PluginEvent};

impl<R: Renderer> GanttEngine<R> {
    #[must_use]
    pub fn scroll_coordinator(&self) -> &ScrollCoordinator {
        &self.scroll
    }

    /// Authoritative horizontal offset shared by every bound pane.
    #[must_use]
    pub fn scroll_offset_px(&self) -> f64 {
        self.scroll.offset_px()
    }

    pub fn bind_pane(&mut self, pane_id: PaneId, pane: Box<dyn ScrollPane>) -> GanttResult<()> {
        self.scroll.bind(pane_id, pane)?;
        self.frames.schedule_clamp();
        Ok(())
    }

    pub fn unbind_pane(&mut self, pane_id: &PaneId) -> GanttResult<Box<dyn ScrollPane>> {
        self.scroll.unbind(pane_id)
    }

    /// Forwards a native scroll notification from `pane_id`.
    pub fn on_scroll(&mut self, pane_id: &PaneId, offset_px: f64) -> ScrollOutcome {
        let outcome = self.scroll.on_scroll(pane_id, offset_px);
        if outcome == ScrollOutcome::Propagated {
            self.emit_plugin_event(PluginEvent::Scrolled {
                offset_px: self.scroll.offset_px(),
            });
        }
        outcome
    }

    /// Scrolls all panes to `offset_px`, clamped to the shared range.
    pub fn scroll_to(&mut self, offset_px: f64) -> f64 {
        let previous = self.scroll.offset_px();
        let applied = self.scroll.scroll_to(offset_px);
        if applied != previous {
            self.emit_plugin_event(PluginEvent::Scrolled { offset_px: applied });
        }
        applied
    }

    /// Scrolls so `instant` sits at the left edge of the viewport.
    ///
    /// Returns `None` until the viewport is measured.
    pub fn scroll_to_time(&mut self, instant: NaiveDateTime) -> Option<f64> {
        let x = self.mapper()?.time_to_pixel(instant);
        debug!(%instant, x, "scroll to time");
        Some(self.scroll_to(x))
    }
}
