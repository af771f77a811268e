//! Optional observer hooks live here.
//!
//! Keep extensions decoupled from core paths.

pub mod plugins;

pub use plugins::{GanttPlugin, PluginContext, PluginEvent};
