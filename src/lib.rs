//! gantt-rs: headless Gantt scheduling engine.
//!
//! Maps wall-clock task ranges onto a horizontally scrollable pixel timeline,
//! keeps several scroll panes in lockstep and turns pointer gestures into
//! snapped task updates. Drawing is delegated to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod scroll;
pub mod telemetry;

pub use api::{GanttEngine, GanttEngineConfig};
pub use error::{GanttError, GanttResult};
