use crate::core::{LayoutEngine, TaskStore};
use crate::error::GanttResult;
use crate::extensions::GanttPlugin;
use crate::interaction::InteractionController;
use crate::render::Renderer;
use crate::scroll::ScrollCoordinator;

use super::validation::validate_render_style;
use super::{FrameScheduler, RenderStyle};

/// Main orchestration facade consumed by host applications.
///
/// One engine per chart instance. It owns the layout service, the scroll
/// coordinator, the frame scheduler, a read snapshot of resources and tasks,
/// the gesture controller and the renderer. Task mutations leave the engine
/// only through a [`crate::interaction::TaskEventSink`]; hosts push their
/// updated snapshot back with [`GanttEngine::sync_task`] or
/// [`GanttEngine::set_data`].
pub struct GanttEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) layout: LayoutEngine,
    pub(super) scroll: ScrollCoordinator,
    pub(super) frames: FrameScheduler,
    pub(super) store: TaskStore,
    pub(super) interaction: InteractionController,
    pub(super) render_style: RenderStyle,
    pub(super) plugins: Vec<Box<dyn GanttPlugin>>,
}

impl<R: Renderer + std::fmt::Debug> std::fmt::Debug for GanttEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plugin_ids: Vec<&str> = self.plugins.iter().map(|plugin| plugin.id()).collect();
        f.debug_struct("GanttEngine")
            .field("renderer", &self.renderer)
            .field("layout", &self.layout)
            .field("scroll", &self.scroll)
            .field("frames", &self.frames)
            .field("store", &self.store)
            .field("interaction", &self.interaction)
            .field("render_style", &self.render_style)
            .field("plugins", &plugin_ids)
            .finish()
    }
}

impl<R: Renderer> GanttEngine<R> {
    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> GanttResult<()> {
        self.render_style = validate_render_style(style)?;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
