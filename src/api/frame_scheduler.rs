use tracing::trace;

use crate::core::Viewport;

/// Deferred per-frame work.
///
/// Resize requests between two animation frames collapse into the latest
/// width. A pane clamp requested during frame `n` runs at frame `n + 1`, after
/// hosts had one frame to apply the new content width to their panes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameScheduler {
    pending_viewport: Option<Viewport>,
    clamp_pending: bool,
    coalesced_resizes: u64,
}

/// What one animation frame did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// A pending resize produced a new layout.
    pub relayout: bool,
    /// Authoritative offset after a scheduled clamp ran.
    pub clamped_offset_px: Option<f64>,
}

impl FrameReport {
    #[must_use]
    pub fn is_idle(self) -> bool {
        !self.relayout && self.clamped_offset_px.is_none()
    }
}

impl FrameScheduler {
    pub fn request_resize(&mut self, viewport: Viewport) {
        if self.pending_viewport.replace(viewport).is_some() {
            self.coalesced_resizes = self.coalesced_resizes.saturating_add(1);
            trace!(
                width = viewport.width,
                coalesced = self.coalesced_resizes,
                "resize coalesced"
            );
        }
    }

    pub fn schedule_clamp(&mut self) {
        self.clamp_pending = true;
    }

    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.pending_viewport.is_some() || self.clamp_pending
    }

    #[must_use]
    pub fn pending_viewport(&self) -> Option<Viewport> {
        self.pending_viewport
    }

    /// Resize requests dropped in favor of a later one since creation.
    #[must_use]
    pub fn coalesced_resizes(&self) -> u64 {
        self.coalesced_resizes
    }

    pub(super) fn take_resize(&mut self) -> Option<Viewport> {
        self.pending_viewport.take()
    }

    pub(super) fn take_clamp(&mut self) -> bool {
        std::mem::take(&mut self.clamp_pending)
    }
}
