use crate::error::{GanttError, GanttResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Primitives for one pixel-synchronized pane (ruler or bar area).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaneLayer {
    pub height_px: f64,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl PaneLayer {
    #[must_use]
    pub fn new(height_px: f64) -> Self {
        Self {
            height_px,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> GanttResult<()> {
        if !self.height_px.is_finite() || self.height_px < 0.0 {
            return Err(GanttError::InvalidData(
                "pane height must be finite and >= 0".to_owned(),
            ));
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Both layers share `content_width_px`; hosts place them in panes bound to
/// the same scroll coordinator.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub content_width_px: f64,
    pub ruler: PaneLayer,
    pub bars: PaneLayer,
    pub tooltip: Option<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(content_width_px: f64, ruler_height_px: f64, bars_height_px: f64) -> Self {
        Self {
            content_width_px,
            ruler: PaneLayer::new(ruler_height_px),
            bars: PaneLayer::new(bars_height_px),
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TextPrimitive) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn validate(&self) -> GanttResult<()> {
        if !self.content_width_px.is_finite() || self.content_width_px <= 0.0 {
            return Err(GanttError::InvalidViewport {
                width: self.content_width_px,
            });
        }
        self.ruler.validate()?;
        self.bars.validate()?;
        if let Some(tooltip) = &self.tooltip {
            tooltip.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ruler.is_empty() && self.bars.is_empty() && self.tooltip.is_none()
    }
}
