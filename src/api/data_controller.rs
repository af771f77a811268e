use tracing::debug;

use crate::core::{BarGeometry, Resource, Task, TaskStore};
use crate::error::{GanttError, GanttResult};
use crate::render::Renderer;

use super::{GanttEngine, PluginEvent};

impl<R: Renderer> GanttEngine<R> {
    /// Replaces the resource rows and the task snapshot.
    ///
    /// The whole snapshot is rejected when ids are duplicated or a task
    /// references an unknown resource.
    pub fn set_data(&mut self, resources: Vec<Resource>, tasks: Vec<Task>) -> GanttResult<()> {
        self.store = TaskStore::new(resources, tasks)?;
        debug!(
            resources = self.store.resources().len(),
            tasks = self.store.task_count(),
            "set gantt data"
        );
        self.emit_plugin_event(PluginEvent::DataUpdated {
            resources_len: self.store.resources().len(),
            tasks_len: self.store.task_count(),
        });
        Ok(())
    }

    /// Pushes one host-side task change back into the snapshot.
    pub fn sync_task(&mut self, task: Task) -> GanttResult<()> {
        self.store.apply_update(task)
    }

    /// Pushes one host-side row reassignment back into the snapshot.
    pub fn sync_task_resource(&mut self, task_id: &str, resource_id: &str) -> GanttResult<()> {
        self.store.apply_move(task_id, resource_id)
    }

    #[must_use]
    pub fn task_store(&self) -> &TaskStore {
        &self.store
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        self.store.resources()
    }

    #[must_use]
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.store.task(task_id)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.store.tasks()
    }

    /// Tasks intersecting the displayed span `[anchor, span_end)`.
    ///
    /// Empty until the viewport is measured.
    pub fn visible_tasks(&self) -> GanttResult<Vec<&Task>> {
        let Some(state) = self.layout.state() else {
            return Ok(Vec::new());
        };
        let span_end = state.time_anchor().span_end()?;
        Ok(self.store.visible_tasks(state.anchor, span_end).collect())
    }

    /// Rendered geometry of a task in content pixels.
    pub fn bar_geometry(&self, task_id: &str) -> GanttResult<Option<BarGeometry>> {
        let task = self
            .store
            .task(task_id)
            .ok_or_else(|| GanttError::UnknownTask(task_id.to_owned()))?;
        Ok(self.mapper().map(|mapper| mapper.to_pixels(task)))
    }
}
