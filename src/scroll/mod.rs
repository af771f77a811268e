//! Offset synchronization across independently scrollable panes.

mod coordinator;
mod virtual_pane;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use coordinator::{ScrollCoordinator, ScrollOutcome};
pub use virtual_pane::VirtualScrollPane;

/// Contract for one natively scrollable region (bars, ruler, scrollbar proxy).
///
/// Implementations may raise scroll notifications synchronously from
/// `set_scroll_left`; the coordinator ignores them while it propagates.
pub trait ScrollPane {
    fn scroll_left(&self) -> f64;
    fn set_scroll_left(&mut self, offset_px: f64);
    fn scroll_width(&self) -> f64;
    fn client_width(&self) -> f64;
    fn set_content_width(&mut self, width_px: f64);
    fn set_horizontal_overflow(&mut self, enabled: bool);

    fn max_scroll_left(&self) -> f64 {
        (self.scroll_width() - self.client_width()).max(0.0)
    }
}

/// Name of a bound pane.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaneId(String);

impl PaneId {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn bars() -> Self {
        Self::new("bars")
    }

    #[must_use]
    pub fn ruler() -> Self {
        Self::new("ruler")
    }

    #[must_use]
    pub fn scrollbar() -> Self {
        Self::new("scrollbar")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
