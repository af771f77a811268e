use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{GanttEngine, PluginEvent};

impl<R: Renderer> GanttEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            layout: self.layout.state().copied(),
            scroll_offset_px: self.scroll.offset_px(),
            resources_len: self.store.resources().len(),
            tasks_len: self.store.task_count(),
            drag_mode: self.interaction.mode(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, context);
        }
    }
}
