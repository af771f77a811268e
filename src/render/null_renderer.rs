use crate::error::GanttResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_bar_count: usize,
    pub last_tick_line_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GanttResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_bar_count = frame.bars.rects.len();
        self.last_tick_line_count = frame.ruler.lines.len();
        self.last_label_count = frame.ruler.texts.len();
        Ok(())
    }
}
