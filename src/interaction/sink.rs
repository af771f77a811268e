use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Task, TaskStore};

/// Whether an update is an in-gesture preview or the final released value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdatePhase {
    Live,
    Committed,
}

/// Receiver of task mutations produced by gestures.
///
/// The engine never writes the task collection itself; the sink owner does.
pub trait TaskEventSink {
    fn on_task_update(&mut self, task: &Task, phase: UpdatePhase);
    fn on_task_move(&mut self, task_id: &str, resource_id: &str);
}

/// Recorded form of one sink callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskEvent {
    Updated { task: Task, phase: UpdatePhase },
    Moved { task_id: String, resource_id: String },
}

impl TaskEventSink for Vec<TaskEvent> {
    fn on_task_update(&mut self, task: &Task, phase: UpdatePhase) {
        self.push(TaskEvent::Updated {
            task: task.clone(),
            phase,
        });
    }

    fn on_task_move(&mut self, task_id: &str, resource_id: &str) {
        self.push(TaskEvent::Moved {
            task_id: task_id.to_owned(),
            resource_id: resource_id.to_owned(),
        });
    }
}

impl TaskEventSink for TaskStore {
    fn on_task_update(&mut self, task: &Task, phase: UpdatePhase) {
        if let Err(err) = self.apply_update(task.clone()) {
            warn!(task_id = %task.id, ?phase, error = %err, "dropping task update");
        }
    }

    fn on_task_move(&mut self, task_id: &str, resource_id: &str) {
        if let Err(err) = self.apply_move(task_id, resource_id) {
            warn!(task_id, resource_id, error = %err, "dropping task move");
        }
    }
}
