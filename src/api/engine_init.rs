use tracing::debug;

use crate::core::{LayoutEngine, TaskStore};
use crate::error::GanttResult;
use crate::interaction::InteractionController;
use crate::render::Renderer;
use crate::scroll::ScrollCoordinator;

use super::{FrameScheduler, GanttEngine, GanttEngineConfig};

impl<R: Renderer> GanttEngine<R> {
    /// Creates an engine. A measured viewport gets its first layout right away;
    /// an unmeasured one waits for [`GanttEngine::request_resize`].
    pub fn new(renderer: R, config: GanttEngineConfig) -> GanttResult<Self> {
        let config = config.validate()?;
        let mut layout = LayoutEngine::new(config.view, config.layout_tuning);
        let scroll = ScrollCoordinator::new();
        if layout.set_viewport(config.viewport) {
            if let Some(state) = layout.state() {
                scroll.apply_layout(state);
            }
        }
        debug!(
            view_type = ?config.view.view_type,
            viewport_width = config.viewport.width,
            measured = layout.state().is_some(),
            "gantt engine initialized"
        );

        Ok(Self {
            renderer,
            layout,
            scroll,
            frames: FrameScheduler::default(),
            store: TaskStore::default(),
            interaction: InteractionController::new(config.interaction_tuning),
            render_style: config.render_style,
            plugins: Vec::new(),
        })
    }
}
