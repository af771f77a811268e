mod frame;
mod null_renderer;
mod primitives;

pub use frame::{PaneLayer, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::GanttResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from scheduling and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GanttResult<()>;
}
