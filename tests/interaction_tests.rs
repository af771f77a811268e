use chrono::{NaiveDate, NaiveDateTime};
use gantt_rs::core::snap::is_on_grid;
use gantt_rs::core::{
    CoordinateMapper, LayoutState, LayoutTuning, Resource, Task, ViewConfig, ViewType, Viewport,
    compute_layout,
};
use gantt_rs::interaction::{
    DragMode, InteractionController, InteractionTuning, TaskEvent, UpdatePhase, format_range,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).expect("valid date")
}

fn at(h: u32, min: u32, s: u32) -> NaiveDateTime {
    day(15).and_hms_opt(h, min, s).expect("valid time")
}

/// Full day at 50 px per hour; one pixel is 72 seconds.
fn hour_layout() -> LayoutState {
    let view = ViewConfig::new(ViewType::Hour, day(15));
    compute_layout(&view, Viewport::new(1198.0), LayoutTuning::default()).expect("layout")
}

fn rows() -> Vec<Resource> {
    vec![
        Resource::new("r1", "Alice"),
        Resource::new("r2", "Bob"),
        Resource::new("r3", "Carol"),
    ]
}

/// 02:00 to 04:00 on the first row: bar spans x = 100..200.
fn task() -> Task {
    Task::new("t1", "r1", "Build", at(2, 0, 0), at(4, 0, 0), "#3B82F6").expect("valid task")
}

fn committed(events: &[TaskEvent]) -> Vec<&Task> {
    events
        .iter()
        .filter_map(|event| match event {
            TaskEvent::Updated {
                task,
                phase: UpdatePhase::Committed,
            } => Some(task),
            _ => None,
        })
        .collect()
}

#[test]
fn hit_test_classifies_edges_and_interior() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let controller = InteractionController::default();
    let bar = mapper.to_pixels(&task());

    assert_eq!(controller.hit_test(bar, 103.0), DragMode::ResizingStart);
    assert_eq!(controller.hit_test(bar, 196.0), DragMode::ResizingEnd);
    assert_eq!(controller.hit_test(bar, 150.0), DragMode::Moving);
    assert_eq!(controller.hit_test(bar, 250.0), DragMode::Idle);
    assert_eq!(controller.hit_test(bar, f64::NAN), DragMode::Idle);
}

#[test]
fn moving_three_units_preserves_duration_and_commits_on_grid() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let mut controller = InteractionController::default();
    let mut events = Vec::new();

    let mode = controller
        .pointer_down(&task(), &mapper, 150.0, 10.0)
        .expect("pointer down");
    assert_eq!(mode, DragMode::Moving);

    controller
        .pointer_move(&mapper, &rows(), 300.0, 10.0, &mut events)
        .expect("pointer move");
    let drag = controller.drag_state().expect("active drag");
    assert_eq!(drag.live_start, at(5, 0, 0));
    assert_eq!(drag.live_end, at(7, 0, 0));

    let done = controller
        .pointer_up(&mut events)
        .expect("pointer up")
        .expect("committed task");
    assert_eq!(done.start, at(5, 0, 0));
    assert_eq!(done.end, at(7, 0, 0));
    assert_eq!(done.resource_id, "r1");
    assert_eq!(controller.mode(), DragMode::Idle);
    assert!(controller.drag_state().is_none());

    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        TaskEvent::Updated { phase: UpdatePhase::Live, .. }
    ));
    assert_eq!(committed(&events), [&done]);
}

#[test]
fn live_updates_are_unsnapped_and_commit_rounds_to_five_minutes() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let mut controller = InteractionController::default();
    let mut events = Vec::new();

    controller
        .pointer_down(&task(), &mapper, 150.0, 10.0)
        .expect("pointer down");
    // Four pixels right: 4 min 48 s.
    controller
        .pointer_move(&mapper, &rows(), 154.0, 10.0, &mut events)
        .expect("pointer move");
    let drag = controller.drag_state().expect("active drag");
    assert_eq!(drag.live_start, at(2, 4, 48));
    assert_eq!(drag.live_end, at(4, 4, 48));

    let done = controller
        .pointer_up(&mut events)
        .expect("pointer up")
        .expect("committed task");
    assert_eq!(done.start, at(2, 5, 0));
    assert_eq!(done.end, at(4, 5, 0));
    assert!(is_on_grid(done.start, 5) && is_on_grid(done.end, 5));
}

#[test]
fn moves_are_computed_from_the_origin_snapshot() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let mut controller = InteractionController::default();
    let mut events = Vec::new();

    controller
        .pointer_down(&task(), &mapper, 150.0, 10.0)
        .expect("pointer down");
    for x in [180.0, 220.0, 300.0, 300.0, 300.0] {
        controller
            .pointer_move(&mapper, &rows(), x, 10.0, &mut events)
            .expect("pointer move");
    }
    let drag = controller.drag_state().expect("active drag");
    assert_eq!(drag.live_start, at(5, 0, 0));
    assert_eq!(events.len(), 5);
}

#[test]
fn moving_is_clamped_to_the_displayed_span() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let mut controller = InteractionController::default();
    let mut events = Vec::new();

    controller
        .pointer_down(&task(), &mapper, 150.0, 10.0)
        .expect("pointer down");
    controller
        .pointer_move(&mapper, &rows(), 5000.0, 10.0, &mut events)
        .expect("pointer move");
    let drag = controller.drag_state().expect("active drag");
    assert_eq!(drag.live_start, at(22, 0, 0));
    assert_eq!(drag.live_end, day(16).and_hms_opt(0, 0, 0).expect("valid time"));

    controller
        .pointer_move(&mapper, &rows(), -500.0, 10.0, &mut events)
        .expect("pointer move");
    let drag = controller.drag_state().expect("active drag");
    assert_eq!(drag.live_start, at(0, 0, 0));
    assert_eq!(drag.live_end, at(2, 0, 0));
}

#[test]
fn crossing_rows_reports_a_move_once_per_row_change() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let mut controller = InteractionController::default();
    let mut events = Vec::new();

    controller
        .pointer_down(&task(), &mapper, 150.0, 10.0)
        .expect("pointer down");
    for y in [50.0, 55.0, 500.0] {
        controller
            .pointer_move(&mapper, &rows(), 150.0, y, &mut events)
            .expect("pointer move");
    }
    let done = controller
        .pointer_up(&mut events)
        .expect("pointer up")
        .expect("committed task");

    let moves: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, TaskEvent::Moved { .. }))
        .collect();
    assert_eq!(
        moves,
        [&TaskEvent::Moved {
            task_id: "t1".to_owned(),
            resource_id: "r2".to_owned(),
        }]
    );
    // The move callback precedes the live update carrying the new row.
    assert!(matches!(&events[0], TaskEvent::Moved { .. }));
    assert!(matches!(
        &events[1],
        TaskEvent::Updated { task, phase: UpdatePhase::Live } if task.resource_id == "r2"
    ));
    assert_eq!(done.resource_id, "r2");
}

#[test]
fn resizing_end_respects_the_minimum_duration() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let mut controller = InteractionController::default();
    let mut events = Vec::new();

    let mode = controller
        .pointer_down(&task(), &mapper, 196.0, 10.0)
        .expect("pointer down");
    assert_eq!(mode, DragMode::ResizingEnd);

    controller
        .pointer_move(&mapper, &rows(), 105.0, 10.0, &mut events)
        .expect("pointer move");
    assert_eq!(controller.drag_state().expect("drag").live_end, at(2, 30, 0));

    controller
        .pointer_move(&mapper, &rows(), 400.0, 10.0, &mut events)
        .expect("pointer move");
    assert_eq!(controller.drag_state().expect("drag").live_end, at(8, 0, 0));

    controller
        .pointer_move(&mapper, &rows(), 9_000.0, 10.0, &mut events)
        .expect("pointer move");
    assert_eq!(
        controller.drag_state().expect("drag").live_end,
        day(16).and_hms_opt(0, 0, 0).expect("valid time")
    );

    let done = controller
        .pointer_up(&mut events)
        .expect("pointer up")
        .expect("committed task");
    assert_eq!(done.start, at(2, 0, 0));
}

#[test]
fn resizing_start_is_clamped_between_anchor_and_end() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let mut controller = InteractionController::default();
    let mut events = Vec::new();

    let mode = controller
        .pointer_down(&task(), &mapper, 103.0, 10.0)
        .expect("pointer down");
    assert_eq!(mode, DragMode::ResizingStart);

    controller
        .pointer_move(&mapper, &rows(), -40.0, 10.0, &mut events)
        .expect("pointer move");
    assert_eq!(controller.drag_state().expect("drag").live_start, at(0, 0, 0));

    controller
        .pointer_move(&mapper, &rows(), 199.0, 10.0, &mut events)
        .expect("pointer move");
    assert_eq!(controller.drag_state().expect("drag").live_start, at(3, 30, 0));

    let done = controller
        .pointer_up(&mut events)
        .expect("pointer up")
        .expect("committed task");
    assert_eq!(done.start, at(3, 30, 0));
    assert_eq!(done.end, at(4, 0, 0));
}

#[test]
fn day_views_use_a_tenth_of_a_day_as_minimum() {
    // Full week at 100 px per day.
    let view = ViewConfig::new(ViewType::Week, day(15));
    let layout =
        compute_layout(&view, Viewport::new(698.0), LayoutTuning::default()).expect("layout");
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let monday = day(11).and_hms_opt(0, 0, 0).expect("valid time");
    let task = Task::new(
        "w1",
        "r1",
        "Review",
        monday,
        day(12).and_hms_opt(0, 0, 0).expect("valid time"),
        "#10B981",
    )
    .expect("valid task");
    let mut controller = InteractionController::default();
    let mut events = Vec::new();

    assert_eq!(
        controller
            .pointer_down(&task, &mapper, 95.0, 10.0)
            .expect("pointer down"),
        DragMode::ResizingEnd
    );
    controller
        .pointer_move(&mapper, &rows(), 0.0, 10.0, &mut events)
        .expect("pointer move");
    assert_eq!(
        controller.drag_state().expect("drag").live_end,
        day(11).and_hms_opt(2, 24, 0).expect("valid time")
    );

    let done = controller
        .pointer_up(&mut events)
        .expect("pointer up")
        .expect("committed task");
    assert_eq!(done.end, day(11).and_hms_opt(2, 25, 0).expect("valid time"));
}

#[test]
fn collapsed_commit_pushes_end_one_granularity_past_start() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let tuning = InteractionTuning {
        min_duration_hour_view_ms: 60_000,
        ..InteractionTuning::default()
    };
    let mut controller = InteractionController::new(tuning);
    let mut events = Vec::new();

    controller
        .pointer_down(&task(), &mapper, 196.0, 10.0)
        .expect("pointer down");
    controller
        .pointer_move(&mapper, &rows(), 100.5, 10.0, &mut events)
        .expect("pointer move");
    assert_eq!(controller.drag_state().expect("drag").live_end, at(2, 1, 0));

    let done = controller
        .pointer_up(&mut events)
        .expect("pointer up")
        .expect("committed task");
    assert_eq!(done.start, at(2, 0, 0));
    assert_eq!(done.end, at(2, 5, 0));
}

#[test]
fn inverted_tasks_start_gestures_at_minimum_duration() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let inverted = Task {
        end: at(4, 0, 0),
        start: at(5, 0, 0),
        ..task()
    };
    let mut controller = InteractionController::default();

    // Rendered at the 24 px floor: x = 250..274.
    let mode = controller
        .pointer_down(&inverted, &mapper, 262.0, 10.0)
        .expect("pointer down");
    assert_eq!(mode, DragMode::Moving);
    let drag = controller.drag_state().expect("drag");
    assert_eq!(drag.live_start, at(5, 0, 0));
    assert_eq!(drag.live_end, at(5, 30, 0));
}

#[test]
fn tooltip_follows_the_pointer_while_dragging() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let mut controller = InteractionController::default();
    let mut events = Vec::new();
    assert!(!controller.tooltip().visible);

    controller
        .pointer_down(&task(), &mapper, 150.0, 10.0)
        .expect("pointer down");
    let tooltip = controller.tooltip();
    assert!(tooltip.visible);
    assert_eq!(tooltip.x, 160.0);
    assert_eq!(tooltip.y, -20.0);
    assert_eq!(tooltip.text, "15/03/2024 02:00 - 15/03/2024 04:00");

    controller
        .pointer_move(&mapper, &rows(), 300.0, 70.0, &mut events)
        .expect("pointer move");
    assert_eq!(controller.tooltip().text, "15/03/2024 05:00 - 15/03/2024 07:00");
    assert_eq!(controller.tooltip().y, 40.0);

    controller.pointer_up(&mut events).expect("pointer up");
    assert!(!controller.tooltip().visible);
}

#[test]
fn idle_controller_ignores_moves_and_releases() {
    let layout = hour_layout();
    let mapper = CoordinateMapper::new(&layout, 24.0);
    let mut controller = InteractionController::default();
    let mut events = Vec::new();

    assert_eq!(
        controller
            .pointer_down(&task(), &mapper, 600.0, 10.0)
            .expect("pointer down"),
        DragMode::Idle
    );
    controller
        .pointer_move(&mapper, &rows(), 300.0, 10.0, &mut events)
        .expect("pointer move");
    assert!(controller.pointer_up(&mut events).expect("pointer up").is_none());
    assert!(events.is_empty());
}

#[test]
fn range_format_uses_day_month_year() {
    assert_eq!(
        format_range(at(9, 5, 0), day(16).and_hms_opt(17, 45, 0).expect("valid time")),
        "15/03/2024 09:05 - 16/03/2024 17:45"
    );
}
