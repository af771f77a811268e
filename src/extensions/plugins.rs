use serde::{Deserialize, Serialize};

use crate::core::LayoutState;
use crate::interaction::DragMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub layout: Option<LayoutState>,
    pub scroll_offset_px: f64,
    pub resources_len: usize,
    pub tasks_len: usize,
    pub drag_mode: DragMode,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DataUpdated { resources_len: usize, tasks_len: usize },
    LayoutChanged { content_width_px: f64, scroll_enabled: bool },
    Scrolled { offset_px: f64 },
    DragStarted { task_id: String, mode: DragMode },
    TaskPreviewed { task_id: String },
    TaskReassigned { task_id: String, resource_id: String },
    TaskCommitted { task_id: String },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating engine
/// internals.
pub trait GanttPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
