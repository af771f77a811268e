use super::ScrollPane;

/// Headless scroll container model.
///
/// Mirrors browser semantics: assignments are clamped to
/// `[0, scroll_width - client_width]`, and a pane with overflow disabled
/// always reports offset 0.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualScrollPane {
    client_width: f64,
    content_width: f64,
    scroll_left: f64,
    overflow_enabled: bool,
}

impl VirtualScrollPane {
    #[must_use]
    pub fn new(client_width: f64) -> Self {
        Self {
            client_width: client_width.max(0.0),
            content_width: client_width.max(0.0),
            scroll_left: 0.0,
            overflow_enabled: true,
        }
    }

    /// Changes the visible width, re-clamping the offset.
    pub fn set_client_width(&mut self, client_width: f64) {
        self.client_width = client_width.max(0.0);
        self.scroll_left = self.clamped(self.scroll_left);
    }

    #[must_use]
    pub fn overflow_enabled(&self) -> bool {
        self.overflow_enabled
    }

    fn clamped(&self, offset: f64) -> f64 {
        if !self.overflow_enabled || !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_left())
    }
}

impl ScrollPane for VirtualScrollPane {
    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn set_scroll_left(&mut self, offset_px: f64) {
        self.scroll_left = self.clamped(offset_px);
    }

    fn scroll_width(&self) -> f64 {
        // Content narrower than the viewport still fills it.
        self.content_width.max(self.client_width)
    }

    fn client_width(&self) -> f64 {
        self.client_width
    }

    fn set_content_width(&mut self, width_px: f64) {
        if width_px.is_finite() && width_px >= 0.0 {
            self.content_width = width_px;
        }
        self.scroll_left = self.clamped(self.scroll_left);
    }

    fn set_horizontal_overflow(&mut self, enabled: bool) {
        self.overflow_enabled = enabled;
        self.scroll_left = self.clamped(self.scroll_left);
    }
}
