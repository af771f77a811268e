use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::core::primitives::add_millis;
use crate::core::snap::snap_to_minutes;
use crate::core::{BarGeometry, CoordinateMapper, Resource, Task};
use crate::error::{GanttError, GanttResult};

use super::{DragMode, DragState, DragTooltip, InteractionTuning, TaskEventSink, UpdatePhase};

/// Gesture state machine: `Idle -> Moving | ResizingStart | ResizingEnd -> Idle`.
///
/// Every pointer move is resolved against the task snapshot taken at
/// pointer-down and the absolute pointer position, so repeated moves never
/// accumulate drift. Live updates are unsnapped; pointer-up snaps both ends to
/// the configured grid and emits the committed task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionController {
    tuning: InteractionTuning,
    drag: Option<DragState>,
    tooltip: DragTooltip,
}

impl InteractionController {
    #[must_use]
    pub fn new(tuning: InteractionTuning) -> Self {
        Self {
            tuning,
            drag: None,
            tooltip: DragTooltip::default(),
        }
    }

    #[must_use]
    pub fn tuning(&self) -> InteractionTuning {
        self.tuning
    }

    pub fn set_tuning(&mut self, tuning: InteractionTuning) -> GanttResult<()> {
        self.tuning = tuning.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.drag.as_ref().map_or(DragMode::Idle, |drag| drag.mode)
    }

    #[must_use]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[must_use]
    pub fn tooltip(&self) -> &DragTooltip {
        &self.tooltip
    }

    /// Classifies a pointer position against a rendered bar.
    ///
    /// Edge zones win over the interior; the left zone wins when a narrow bar
    /// makes both zones overlap. Positions outside the bar are `Idle`.
    #[must_use]
    pub fn hit_test(&self, bar: BarGeometry, pointer_x: f64) -> DragMode {
        if !pointer_x.is_finite() || !bar.contains_x(pointer_x) {
            return DragMode::Idle;
        }
        let local_x = pointer_x - bar.left;
        let zone = self.tuning.edge_hit_zone_px;
        if local_x <= zone {
            DragMode::ResizingStart
        } else if local_x >= bar.width - zone {
            DragMode::ResizingEnd
        } else {
            DragMode::Moving
        }
    }

    /// Starts a gesture on `task` when the pointer lands on its bar.
    ///
    /// Pointer coordinates are in content pixels. A gesture already in progress
    /// is kept and its mode returned.
    pub fn pointer_down(
        &mut self,
        task: &Task,
        mapper: &CoordinateMapper<'_>,
        pointer_x: f64,
        pointer_y: f64,
    ) -> GanttResult<DragMode> {
        if let Some(drag) = &self.drag {
            return Ok(drag.mode);
        }

        let bar = mapper.to_pixels(task);
        let mode = self.hit_test(bar, pointer_x);
        if mode == DragMode::Idle {
            return Ok(mode);
        }

        let min_duration = self.tuning.min_duration(mapper.layout().unit);
        let live_end = if task.end > task.start {
            task.end
        } else {
            // Inverted ranges from the store start out at the minimum duration.
            checked_add(task.start, min_duration)?
        };

        let drag = DragState {
            mode,
            task: task.clone(),
            pointer_origin_offset_px: pointer_x - bar.left,
            live_start: task.start,
            live_end,
            live_resource_id: task.resource_id.clone(),
        };
        debug!(task_id = %task.id, ?mode, "drag started");
        self.show_tooltip(pointer_x, pointer_y, drag.live_start, drag.live_end);
        self.drag = Some(drag);
        Ok(mode)
    }

    /// Advances the active gesture and emits a live update.
    ///
    /// `rows` are the resources in row order; a move across a row boundary is
    /// reported through [`TaskEventSink::on_task_move`]. Idle controllers ignore
    /// moves.
    pub fn pointer_move<S>(
        &mut self,
        mapper: &CoordinateMapper<'_>,
        rows: &[Resource],
        pointer_x: f64,
        pointer_y: f64,
        sink: &mut S,
    ) -> GanttResult<()>
    where
        S: TaskEventSink + ?Sized,
    {
        let Some(mut drag) = self.drag.take() else {
            return Ok(());
        };
        let result = self.advance(&mut drag, mapper, rows, pointer_x, pointer_y, sink);
        self.drag = Some(drag);
        result
    }

    fn advance<S>(
        &mut self,
        drag: &mut DragState,
        mapper: &CoordinateMapper<'_>,
        rows: &[Resource],
        pointer_x: f64,
        pointer_y: f64,
        sink: &mut S,
    ) -> GanttResult<()>
    where
        S: TaskEventSink + ?Sized,
    {
        if !pointer_x.is_finite() || !pointer_y.is_finite() {
            return Err(GanttError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }

        let layout = mapper.layout();
        let anchor = layout.anchor;
        let span_end = layout.time_anchor().span_end()?;
        let min_duration = self.tuning.min_duration(layout.unit);

        match drag.mode {
            DragMode::Idle => return Ok(()),
            DragMode::Moving => {
                let duration = drag.live_end - drag.live_start;
                let duration_ms = duration.num_milliseconds() as f64;
                let span_ms = layout.time_anchor().span_ms();
                let candidate_ms =
                    mapper.pixels_to_duration_ms(pointer_x - drag.pointer_origin_offset_px);
                let offset_ms = candidate_ms.min(span_ms - duration_ms).max(0.0);
                let start = add_millis(anchor, offset_ms)?;
                drag.live_start = start;
                drag.live_end = checked_add(start, duration)?;

                if let Some(resource) = row_at(rows, pointer_y, self.tuning.row_height_px) {
                    if resource.id != drag.live_resource_id {
                        trace!(task_id = %drag.task.id, resource_id = %resource.id, "row changed");
                        drag.live_resource_id = resource.id.clone();
                        sink.on_task_move(&drag.task.id, &resource.id);
                    }
                }
            }
            DragMode::ResizingStart => {
                let candidate = mapper.to_time(pointer_x.max(0.0))?;
                let latest = checked_sub(drag.live_end, min_duration)?;
                drag.live_start = candidate.max(anchor).min(latest);
            }
            DragMode::ResizingEnd => {
                let candidate = mapper.to_time(pointer_x)?;
                let earliest = checked_add(drag.live_start, min_duration)?;
                drag.live_end = candidate.min(span_end).max(earliest);
            }
        }

        self.show_tooltip(pointer_x, pointer_y, drag.live_start, drag.live_end);
        sink.on_task_update(&drag.live_task(), UpdatePhase::Live);
        Ok(())
    }

    /// Ends the gesture, snapping both ends to the grid and emitting the
    /// committed task. Returns `None` when no gesture was active.
    pub fn pointer_up<S>(&mut self, sink: &mut S) -> GanttResult<Option<Task>>
    where
        S: TaskEventSink + ?Sized,
    {
        self.tooltip.hide();
        let Some(drag) = self.drag.take() else {
            return Ok(None);
        };

        let start = snap_to_minutes(drag.live_start, self.tuning.snap_minutes)?;
        let mut end = snap_to_minutes(drag.live_end, self.tuning.snap_minutes)?;
        if end <= start {
            end = checked_add(start, self.tuning.snap_granularity())?;
        }

        let committed = drag
            .task
            .with_range(start, end)
            .with_resource(drag.live_resource_id.clone());
        debug!(
            task_id = %committed.id,
            mode = ?drag.mode,
            start = %committed.start,
            end = %committed.end,
            "drag committed"
        );
        sink.on_task_update(&committed, UpdatePhase::Committed);
        Ok(Some(committed))
    }

    fn show_tooltip(&mut self, x: f64, y: f64, start: NaiveDateTime, end: NaiveDateTime) {
        self.tooltip.show(
            x + self.tuning.tooltip_offset_x_px,
            y + self.tuning.tooltip_offset_y_px,
            start,
            end,
        );
    }
}

fn row_at<'a>(rows: &'a [Resource], pointer_y: f64, row_height_px: f64) -> Option<&'a Resource> {
    if pointer_y < 0.0 || row_height_px <= 0.0 {
        return None;
    }
    let index = (pointer_y / row_height_px).floor();
    if index >= rows.len() as f64 {
        return None;
    }
    rows.get(index as usize)
}

fn checked_add(instant: NaiveDateTime, delta: chrono::TimeDelta) -> GanttResult<NaiveDateTime> {
    instant
        .checked_add_signed(delta)
        .ok_or_else(|| GanttError::InvalidData("task time is out of range".to_owned()))
}

fn checked_sub(instant: NaiveDateTime, delta: chrono::TimeDelta) -> GanttResult<NaiveDateTime> {
    instant
        .checked_sub_signed(delta)
        .ok_or_else(|| GanttError::InvalidData("task time is out of range".to_owned()))
}
