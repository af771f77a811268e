use chrono::NaiveDateTime;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::types::{Resource, Task};
use crate::error::{GanttError, GanttResult};

/// In-memory resource rows and tasks keyed by id.
///
/// Rows keep the order resources were supplied in. Task insertion order is
/// preserved so iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    resources: Vec<Resource>,
    tasks: IndexMap<String, Task>,
}

impl TaskStore {
    /// Builds a store, rejecting duplicate ids and dangling resource references.
    ///
    /// Tasks with inverted ranges are kept; mapping treats them as zero length.
    pub fn new(resources: Vec<Resource>, tasks: Vec<Task>) -> GanttResult<Self> {
        let mut store = Self::default();
        store.set_resources(resources)?;
        store.set_tasks(tasks)?;
        Ok(store)
    }

    pub fn set_resources(&mut self, resources: Vec<Resource>) -> GanttResult<()> {
        let mut seen = std::collections::HashSet::with_capacity(resources.len());
        for resource in &resources {
            if resource.id.is_empty() {
                return Err(GanttError::InvalidData(
                    "resource id must not be empty".to_owned(),
                ));
            }
            if !seen.insert(resource.id.as_str()) {
                return Err(GanttError::InvalidData(format!(
                    "duplicate resource id `{}`",
                    resource.id
                )));
            }
        }
        if let Some(task) = self
            .tasks
            .values()
            .find(|task| !resources.iter().any(|r| r.id == task.resource_id))
        {
            return Err(GanttError::InvalidData(format!(
                "task `{}` references unknown resource `{}`",
                task.id, task.resource_id
            )));
        }
        self.resources = resources;
        Ok(())
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> GanttResult<()> {
        let mut next = IndexMap::with_capacity(tasks.len());
        for task in tasks {
            task.validate_identity()?;
            if !task.has_valid_range() {
                warn!(task_id = %task.id, "task ends before it starts; rendering as zero duration");
            }
            self.ensure_resource(&task.resource_id)?;
            if next.contains_key(&task.id) {
                return Err(GanttError::InvalidData(format!(
                    "duplicate task id `{}`",
                    task.id
                )));
            }
            next.insert(task.id.clone(), task);
        }
        debug!(count = next.len(), "set tasks");
        self.tasks = next;
        Ok(())
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Row index of a resource.
    #[must_use]
    pub fn row_of(&self, resource_id: &str) -> Option<usize> {
        self.resources.iter().position(|r| r.id == resource_id)
    }

    /// Replaces an existing task with an updated copy.
    pub fn apply_update(&mut self, task: Task) -> GanttResult<()> {
        task.validate()?;
        self.ensure_resource(&task.resource_id)?;
        match self.tasks.get_mut(&task.id) {
            Some(slot) => {
                *slot = task;
                Ok(())
            }
            None => Err(GanttError::UnknownTask(task.id)),
        }
    }

    /// Reassigns a task to another resource row.
    pub fn apply_move(&mut self, task_id: &str, resource_id: &str) -> GanttResult<()> {
        self.ensure_resource(resource_id)?;
        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| GanttError::UnknownTask(task_id.to_owned()))?;
        task.resource_id = resource_id.to_owned();
        Ok(())
    }

    /// Tasks of one resource that intersect `[from, to)`, in insertion order.
    pub fn visible_tasks_for<'a>(
        &'a self,
        resource_id: &'a str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks
            .values()
            .filter(move |task| task.resource_id == resource_id && task.overlaps(from, to))
    }

    /// All tasks intersecting `[from, to)`.
    pub fn visible_tasks(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> impl Iterator<Item = &Task> {
        self.tasks
            .values()
            .filter(move |task| task.overlaps(from, to))
    }

    fn ensure_resource(&self, resource_id: &str) -> GanttResult<()> {
        if self.resources.iter().any(|r| r.id == resource_id) {
            Ok(())
        } else {
            warn!(resource_id, "rejecting reference to unknown resource");
            Err(GanttError::InvalidData(format!(
                "unknown resource `{resource_id}`"
            )))
        }
    }
}
