mod data_controller;
mod engine;
mod engine_config;
mod engine_init;
mod frame_scheduler;
mod interaction_controller;
mod layout_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod render_style;
mod scroll_controller;
mod validation;

pub use engine::GanttEngine;
pub use engine_config::{GANTT_CONFIG_JSON_SCHEMA_V1, GanttEngineConfig, GanttEngineConfigJsonContractV1};
pub use frame_scheduler::{FrameReport, FrameScheduler};
pub use render_style::RenderStyle;

pub use crate::extensions::{GanttPlugin, PluginContext, PluginEvent};
