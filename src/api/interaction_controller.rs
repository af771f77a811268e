use tracing::trace;

use crate::core::{CoordinateMapper, Task};
use crate::error::{GanttError, GanttResult};
use crate::interaction::{DragMode, DragState, DragTooltip, InteractionTuning, TaskEventSink};
use crate::render::Renderer;

use super::validation::validate_pointer;
use super::{GanttEngine, PluginEvent};

impl<R: Renderer> GanttEngine<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> DragMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.interaction.drag_state()
    }

    /// Tooltip for the active gesture, in content coordinates.
    #[must_use]
    pub fn drag_tooltip(&self) -> &DragTooltip {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn interaction_tuning(&self) -> InteractionTuning {
        self.interaction.tuning()
    }

    /// Rejected while a gesture is active.
    pub fn set_interaction_tuning(&mut self, tuning: InteractionTuning) -> GanttResult<()> {
        if self.interaction.mode().is_active() {
            return Err(GanttError::InvalidConfig(
                "interaction tuning cannot change during a drag".to_owned(),
            ));
        }
        self.interaction.set_tuning(tuning)
    }

    /// Task whose bar lies under a pointer position, if any.
    ///
    /// `x` is relative to the viewport's left edge and `y` to the top of the
    /// chart content. Later tasks win where bars overlap, matching paint order.
    pub fn task_at(&self, x: f64, y: f64) -> GanttResult<Option<(&Task, DragMode)>> {
        validate_pointer(x, y)?;
        let Some(state) = self.layout.state() else {
            return Ok(None);
        };
        let row_height = self.interaction.tuning().row_height_px;
        if y < 0.0 {
            return Ok(None);
        }
        let Some(resource) = self.store.resources().get((y / row_height).floor() as usize) else {
            return Ok(None);
        };

        let mapper = CoordinateMapper::new(state, self.layout.tuning().min_bar_width_px);
        let content_x = x + self.scroll.offset_px();
        let span_end = state.time_anchor().span_end()?;
        Ok(self
            .store
            .visible_tasks_for(&resource.id, state.anchor, span_end)
            .filter_map(|task| {
                let mode = self.interaction.hit_test(mapper.to_pixels(task), content_x);
                (mode != DragMode::Idle).then_some((task, mode))
            })
            .last())
    }

    /// Starts a move or resize when the pointer lands on a bar.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> GanttResult<DragMode> {
        if self.interaction.mode().is_active() {
            return Ok(self.interaction.mode());
        }
        let Some(task) = self.task_at(x, y)?.map(|(task, _)| task.clone()) else {
            return Ok(DragMode::Idle);
        };
        let Some(state) = self.layout.state() else {
            return Ok(DragMode::Idle);
        };

        let mapper = CoordinateMapper::new(state, self.layout.tuning().min_bar_width_px);
        let content_x = x + self.scroll.offset_px();
        let mode = self.interaction.pointer_down(&task, &mapper, content_x, y)?;
        if mode.is_active() {
            self.emit_plugin_event(PluginEvent::DragStarted {
                task_id: task.id,
                mode,
            });
        }
        Ok(mode)
    }

    /// Advances the active gesture. Live updates and row changes go to `sink`.
    pub fn pointer_move<S>(&mut self, x: f64, y: f64, sink: &mut S) -> GanttResult<()>
    where
        S: TaskEventSink + ?Sized,
    {
        validate_pointer(x, y)?;
        let Some(previous_resource) = self
            .interaction
            .drag_state()
            .map(|drag| drag.live_resource_id.clone())
        else {
            return Ok(());
        };
        let Some(state) = self.layout.state() else {
            trace!("pointer move before layout; ignored");
            return Ok(());
        };

        let mapper = CoordinateMapper::new(state, self.layout.tuning().min_bar_width_px);
        let content_x = x + self.scroll.offset_px();
        self.interaction
            .pointer_move(&mapper, self.store.resources(), content_x, y, sink)?;

        let Some(drag) = self.interaction.drag_state() else {
            return Ok(());
        };
        let task_id = drag.task_id().to_owned();
        let resource_id = drag.live_resource_id.clone();
        if resource_id != previous_resource {
            self.emit_plugin_event(PluginEvent::TaskReassigned {
                task_id: task_id.clone(),
                resource_id,
            });
        }
        self.emit_plugin_event(PluginEvent::TaskPreviewed { task_id });
        Ok(())
    }

    /// Ends the active gesture and emits the snapped task to `sink`.
    pub fn pointer_up<S>(&mut self, sink: &mut S) -> GanttResult<Option<Task>>
    where
        S: TaskEventSink + ?Sized,
    {
        let committed = self.interaction.pointer_up(sink)?;
        if let Some(task) = &committed {
            self.emit_plugin_event(PluginEvent::TaskCommitted {
                task_id: task.id.clone(),
            });
        }
        Ok(committed)
    }
}
