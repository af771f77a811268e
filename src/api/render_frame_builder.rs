use tracing::{trace, warn};

use crate::core::{CoordinateMapper, Task, TickAlign, TickKind, ticks};
use crate::error::GanttResult;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{GanttEngine, PluginEvent};

const TICK_STROKE_PX: f64 = 1.0;
const TITLE_PADDING_PX: f64 = 4.0;

impl<R: Renderer> GanttEngine<R> {
    /// Materializes the ruler and bar layers for the current layout.
    ///
    /// Returns `None` until the viewport is measured. The task under an active
    /// gesture is drawn at its live range and row.
    pub fn build_render_frame(&self) -> GanttResult<Option<RenderFrame>> {
        let Some(state) = self.layout.state() else {
            return Ok(None);
        };
        let style = self.render_style;
        let tuning = self.layout.tuning();
        let row_height = self.interaction.tuning().row_height_px;
        let rows = self.store.resources().len();
        let mapper = CoordinateMapper::new(state, tuning.min_bar_width_px);
        let mut frame = RenderFrame::new(
            state.content_width_px,
            style.ruler_height_px,
            rows as f64 * row_height,
        );

        for tick in ticks(state, self.layout.view_config(), tuning) {
            let (y1, color) = match tick.kind {
                TickKind::Minor => (style.ruler_height_px * 0.5, style.minor_tick_color),
                TickKind::Boundary | TickKind::Major => (0.0, style.tick_color),
            };
            frame.ruler.lines.push(LinePrimitive::vertical(
                tick.x,
                y1,
                style.ruler_height_px,
                TICK_STROKE_PX,
                color,
            ));
            if let Some(label) = tick.label {
                frame.ruler.texts.push(TextPrimitive::new(
                    label,
                    tick.x,
                    style.label_top_px,
                    style.label_font_size_px,
                    style.label_color,
                    text_align(tick.align),
                ));
            }
        }

        for row in 1..=rows {
            let y = row as f64 * row_height;
            frame.bars.lines.push(LinePrimitive::new(
                0.0,
                y,
                state.content_width_px,
                y,
                TICK_STROKE_PX,
                style.row_divider_color,
            ));
        }

        let span_end = state.time_anchor().span_end()?;
        let dragged = self.interaction.drag_state();
        let dragged_id = dragged.map(|drag| drag.task_id());
        let live = dragged.map(|drag| drag.live_task());
        let tasks = self
            .store
            .visible_tasks(state.anchor, span_end)
            .filter(|task| Some(task.id.as_str()) != dragged_id)
            .chain(live.as_ref());
        for task in tasks {
            let Some(row) = self.store.row_of(&task.resource_id) else {
                continue;
            };
            self.push_bar(&mut frame, &mapper, task, row, row_height);
        }

        let tooltip = self.interaction.tooltip();
        if tooltip.visible {
            frame = frame.with_tooltip(TextPrimitive::new(
                tooltip.text.clone(),
                tooltip.x,
                tooltip.y,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Left,
            ));
        }

        trace!(
            bars = frame.bars.rects.len(),
            ticks = frame.ruler.lines.len(),
            "built render frame"
        );
        Ok(Some(frame))
    }

    /// Builds and renders one frame. Returns `false` until the viewport is
    /// measured.
    pub fn render(&mut self) -> GanttResult<bool> {
        let Some(frame) = self.build_render_frame()? else {
            return Ok(false);
        };
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(true)
    }

    fn push_bar(
        &self,
        frame: &mut RenderFrame,
        mapper: &CoordinateMapper<'_>,
        task: &Task,
        row: usize,
        row_height: f64,
    ) {
        let style = self.render_style;
        let bar = mapper.to_pixels(task);
        let top = row as f64 * row_height + style.bar_inset_px;
        let fill = Color::from_hex(&task.color).unwrap_or_else(|err| {
            warn!(task_id = %task.id, error = %err, "using fallback bar color");
            style.fallback_bar_color
        });
        frame.bars.rects.push(
            RectPrimitive::new(bar.left, top, bar.width, style.bar_height_px, fill)
                .with_task_id(task.id.clone()),
        );
        if !task.title.is_empty() {
            frame.bars.texts.push(TextPrimitive::new(
                task.title.clone(),
                bar.left + TITLE_PADDING_PX,
                top + (style.bar_height_px - style.label_font_size_px) * 0.5,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Left,
            ));
        }
    }
}

fn text_align(align: TickAlign) -> TextHAlign {
    match align {
        TickAlign::Left => TextHAlign::Left,
        TickAlign::Center => TextHAlign::Center,
        TickAlign::Right => TextHAlign::Right,
    }
}
