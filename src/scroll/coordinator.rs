use std::cell::{Cell, RefCell};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::LayoutState;
use crate::error::{GanttError, GanttResult};

use super::{PaneId, ScrollPane};

/// Result of one scroll notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollOutcome {
    /// The offset was mirrored to every other pane.
    Propagated,
    /// Scrolling is disabled for the current layout; all panes were reset to 0.
    Pinned,
    /// Raised while another propagation was in progress.
    IgnoredReentrant,
    IgnoredUnknownPane,
    IgnoredInvalidOffset,
}

/// Sets the reentrancy flag for its lifetime and clears it on every exit path.
struct SyncGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> SyncGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for SyncGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Keeps bound panes mirrored at one horizontal offset.
///
/// Methods take `&self` so panes that dispatch scroll notifications
/// synchronously can call back into the coordinator; such nested calls are
/// ignored instead of looping.
#[derive(Default)]
pub struct ScrollCoordinator {
    panes: RefCell<IndexMap<PaneId, Box<dyn ScrollPane>>>,
    syncing: Cell<bool>,
    offset_px: Cell<f64>,
    scroll_enabled: Cell<bool>,
    content_width_px: Cell<Option<f64>>,
    layout_max_offset_px: Cell<f64>,
}

impl std::fmt::Debug for ScrollCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pane_ids: Vec<PaneId> = self
            .panes
            .try_borrow()
            .map(|panes| panes.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("ScrollCoordinator")
            .field("panes", &pane_ids)
            .field("syncing", &self.syncing.get())
            .field("offset_px", &self.offset_px.get())
            .field("scroll_enabled", &self.scroll_enabled.get())
            .field("content_width_px", &self.content_width_px.get())
            .finish()
    }
}

impl ScrollCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Authoritative offset shared by all panes.
    #[must_use]
    pub fn offset_px(&self) -> f64 {
        self.offset_px.get()
    }

    #[must_use]
    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled.get()
    }

    #[must_use]
    pub fn is_syncing(&self) -> bool {
        self.syncing.get()
    }

    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.panes.try_borrow().map(|panes| panes.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_bound(&self, pane_id: &PaneId) -> bool {
        self.panes
            .try_borrow()
            .map(|panes| panes.contains_key(pane_id))
            .unwrap_or(false)
    }

    /// Current native offsets in binding order.
    #[must_use]
    pub fn pane_offsets(&self) -> Vec<(PaneId, f64)> {
        self.panes
            .try_borrow()
            .map(|panes| {
                panes
                    .iter()
                    .map(|(id, pane)| (id.clone(), pane.scroll_left()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Native offset of one pane.
    pub fn pane_offset(&self, pane_id: &PaneId) -> GanttResult<f64> {
        let panes = self.panes.try_borrow().map_err(|_| busy())?;
        panes
            .get(pane_id)
            .map(|pane| pane.scroll_left())
            .ok_or_else(|| GanttError::UnknownPane(pane_id.to_string()))
    }

    /// Registers a pane and brings it in line with the current geometry.
    pub fn bind(&self, pane_id: PaneId, mut pane: Box<dyn ScrollPane>) -> GanttResult<()> {
        let _guard = SyncGuard::enter(&self.syncing).ok_or_else(busy)?;
        let mut panes = self.panes.try_borrow_mut().map_err(|_| busy())?;
        if panes.contains_key(&pane_id) {
            return Err(GanttError::DuplicatePane(pane_id.to_string()));
        }

        if let Some(width) = self.content_width_px.get() {
            pane.set_content_width(width);
            pane.set_horizontal_overflow(self.scroll_enabled.get());
        }
        let target = if self.scroll_enabled.get() {
            self.offset_px.get()
        } else {
            0.0
        };
        pane.set_scroll_left(target);

        debug!(pane = %pane_id, offset_px = target, "bound scroll pane");
        panes.insert(pane_id, pane);
        Ok(())
    }

    /// Removes a pane. Returns the pane so the host can dispose of it.
    ///
    /// Fails while a propagation is in progress, leaving the pane bound.
    pub fn unbind(&self, pane_id: &PaneId) -> GanttResult<Box<dyn ScrollPane>> {
        let _guard = SyncGuard::enter(&self.syncing).ok_or_else(busy)?;
        let mut panes = self.panes.try_borrow_mut().map_err(|_| busy())?;
        let removed = panes
            .shift_remove(pane_id)
            .ok_or_else(|| GanttError::UnknownPane(pane_id.to_string()))?;
        debug!(pane = %pane_id, "unbound scroll pane");
        Ok(removed)
    }

    /// Handles a native scroll notification from one pane.
    pub fn on_scroll(&self, pane_id: &PaneId, offset_px: f64) -> ScrollOutcome {
        let Some(_guard) = SyncGuard::enter(&self.syncing) else {
            trace!(pane = %pane_id, "ignoring scroll raised during propagation");
            return ScrollOutcome::IgnoredReentrant;
        };
        if !offset_px.is_finite() {
            return ScrollOutcome::IgnoredInvalidOffset;
        }
        let Ok(mut panes) = self.panes.try_borrow_mut() else {
            return ScrollOutcome::IgnoredReentrant;
        };
        if !panes.contains_key(pane_id) {
            return ScrollOutcome::IgnoredUnknownPane;
        }

        if !self.scroll_enabled.get() {
            for pane in panes.values_mut() {
                if pane.scroll_left() != 0.0 {
                    pane.set_scroll_left(0.0);
                }
            }
            self.offset_px.set(0.0);
            return ScrollOutcome::Pinned;
        }

        // Peers with a shorter range would clamp natively and drift apart.
        let shared_max = self.shared_max_offset(&panes);
        let target = offset_px.clamp(0.0, shared_max);
        for pane in panes.values_mut() {
            if pane.scroll_left() != target {
                pane.set_scroll_left(target);
            }
        }
        self.offset_px.set(target);
        trace!(
            pane = %pane_id,
            requested_px = offset_px,
            offset_px = target,
            "propagated scroll offset"
        );
        ScrollOutcome::Propagated
    }

    /// Programmatic scroll applied to every pane, clamped to the shared range.
    ///
    /// Returns the offset actually applied.
    pub fn scroll_to(&self, offset_px: f64) -> f64 {
        if offset_px.is_finite() {
            self.offset_px.set(offset_px);
        }
        self.clamp_to_shared_range()
    }

    /// Pushes new content geometry to every pane.
    ///
    /// Call [`ScrollCoordinator::clamp_to_shared_range`] once the panes report
    /// their new widths.
    pub fn apply_layout(&self, layout: &LayoutState) {
        let Some(_guard) = SyncGuard::enter(&self.syncing) else {
            return;
        };
        let Ok(mut panes) = self.panes.try_borrow_mut() else {
            return;
        };
        self.scroll_enabled.set(layout.scroll_enabled);
        self.content_width_px.set(Some(layout.content_width_px));
        self.layout_max_offset_px.set(layout.max_scroll_offset_px());

        for pane in panes.values_mut() {
            pane.set_content_width(layout.content_width_px);
            pane.set_horizontal_overflow(layout.scroll_enabled);
            if !layout.scroll_enabled {
                pane.set_scroll_left(0.0);
            }
        }
        if !layout.scroll_enabled {
            self.offset_px.set(0.0);
        }
        debug!(
            panes = panes.len(),
            content_width_px = layout.content_width_px,
            scroll_enabled = layout.scroll_enabled,
            "applied layout to scroll panes"
        );
    }

    /// Clamps every pane into the range all panes can display.
    ///
    /// Each pane is first clamped to its own `[0, scroll_width - client_width]`;
    /// the smallest of those maxima then bounds the authoritative offset, which
    /// is applied to all panes. Returns the applied offset.
    pub fn clamp_to_shared_range(&self) -> f64 {
        let Some(_guard) = SyncGuard::enter(&self.syncing) else {
            return self.offset_px.get();
        };
        let Ok(mut panes) = self.panes.try_borrow_mut() else {
            return self.offset_px.get();
        };

        for pane in panes.values_mut() {
            let own = pane.scroll_left().clamp(0.0, pane.max_scroll_left());
            if own != pane.scroll_left() {
                pane.set_scroll_left(own);
            }
        }

        let shared_max = self.shared_max_offset(&panes);
        let target = if self.scroll_enabled.get() {
            self.offset_px.get().clamp(0.0, shared_max)
        } else {
            0.0
        };
        for pane in panes.values_mut() {
            if pane.scroll_left() != target {
                pane.set_scroll_left(target);
            }
        }
        self.offset_px.set(target);
        trace!(shared_max, offset_px = target, "clamped scroll panes");
        target
    }

    /// Smallest `scroll_width - client_width` over the given panes.
    ///
    /// Without bound panes the layout's own range is the only bound.
    fn shared_max_offset(&self, panes: &IndexMap<PaneId, Box<dyn ScrollPane>>) -> f64 {
        let max_offsets: SmallVec<[OrderedFloat<f64>; 4]> = panes
            .values()
            .map(|pane| OrderedFloat(pane.max_scroll_left().max(0.0)))
            .collect();
        max_offsets
            .iter()
            .min()
            .map_or(self.layout_max_offset_px.get(), |value| value.0)
    }
}

fn busy() -> GanttError {
    GanttError::InvalidData("scroll coordinator is propagating an offset".to_owned())
}
