use chrono::{NaiveDate, NaiveDateTime};
use gantt_rs::GanttError;
use gantt_rs::core::{Resource, Task, TaskStore};
use gantt_rs::interaction::{TaskEventSink, UpdatePhase};

fn at(d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, d)
        .expect("valid date")
        .and_hms_opt(h, 0, 0)
        .expect("valid time")
}

fn task(id: &str, resource: &str, start: NaiveDateTime, end: NaiveDateTime) -> Task {
    Task::new(id, resource, id, start, end, "#F59E0B").expect("valid task")
}

fn resources() -> Vec<Resource> {
    vec![Resource::new("r1", "Alice"), Resource::new("r2", "Bob")]
}

fn store() -> TaskStore {
    TaskStore::new(
        resources(),
        vec![
            task("a", "r1", at(15, 2), at(15, 4)),
            task("b", "r2", at(15, 6), at(15, 9)),
            task("c", "r1", at(14, 20), at(15, 1)),
        ],
    )
    .expect("valid store")
}

#[test]
fn task_constructor_rejects_inverted_ranges() {
    let err = Task::new("x", "r1", "", at(15, 4), at(15, 4), "#000").expect_err("empty range");
    assert!(matches!(err, GanttError::InvalidData(_)));
}

#[test]
fn store_rejects_duplicates_and_dangling_rows() {
    let duplicate = TaskStore::new(
        resources(),
        vec![
            task("a", "r1", at(15, 2), at(15, 4)),
            task("a", "r2", at(15, 6), at(15, 8)),
        ],
    );
    assert!(matches!(duplicate, Err(GanttError::InvalidData(_))));

    let dangling = TaskStore::new(resources(), vec![task("a", "r9", at(15, 2), at(15, 4))]);
    assert!(matches!(dangling, Err(GanttError::InvalidData(_))));

    let rows = TaskStore::new(
        vec![Resource::new("r1", "Alice"), Resource::new("r1", "Again")],
        Vec::new(),
    );
    assert!(matches!(rows, Err(GanttError::InvalidData(_))));
}

#[test]
fn store_keeps_inverted_ranges_from_hosts() {
    let inverted = Task {
        start: at(15, 5),
        end: at(15, 3),
        ..task("inv", "r1", at(15, 1), at(15, 2))
    };
    let store = TaskStore::new(resources(), vec![inverted]).expect("tolerated");
    assert_eq!(store.task_count(), 1);
}

#[test]
fn rows_follow_resource_order() {
    let store = store();
    assert_eq!(store.row_of("r1"), Some(0));
    assert_eq!(store.row_of("r2"), Some(1));
    assert_eq!(store.row_of("nope"), None);
}

#[test]
fn visible_tasks_overlap_the_half_open_span() {
    let store = store();
    let from = at(15, 0);
    let to = at(16, 0);

    let ids: Vec<_> = store
        .visible_tasks(from, to)
        .map(|task| task.id.as_str())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);

    // A task ending exactly at the span start is outside it.
    let ids: Vec<_> = store
        .visible_tasks(at(15, 9), at(15, 12))
        .map(|task| task.id.as_str())
        .collect();
    assert!(ids.is_empty());

    let row: Vec<_> = store
        .visible_tasks_for("r1", from, to)
        .map(|task| task.id.as_str())
        .collect();
    assert_eq!(row, ["a", "c"]);
}

#[test]
fn updates_and_moves_replace_existing_tasks() {
    let mut store = store();
    let moved = store
        .task("a")
        .expect("task a")
        .with_range(at(15, 10), at(15, 12));
    store.apply_update(moved.clone()).expect("update");
    assert_eq!(store.task("a"), Some(&moved));

    store.apply_move("a", "r2").expect("move");
    assert_eq!(store.task("a").expect("task a").resource_id, "r2");

    let unknown = store.apply_update(task("zz", "r1", at(15, 1), at(15, 2)));
    assert!(matches!(unknown, Err(GanttError::UnknownTask(id)) if id == "zz"));
    assert!(store.apply_move("a", "r9").is_err());
}

#[test]
fn store_acts_as_event_sink() {
    let mut store = store();
    let updated = store
        .task("b")
        .expect("task b")
        .with_range(at(15, 7), at(15, 10));

    store.on_task_move("b", "r1");
    store.on_task_update(&updated.with_resource("r1"), UpdatePhase::Committed);
    let b = store.task("b").expect("task b");
    assert_eq!(b.resource_id, "r1");
    assert_eq!(b.start, at(15, 7));

    // Unknown ids are dropped without touching the snapshot.
    store.on_task_move("ghost", "r1");
    assert_eq!(store.task_count(), 3);
}
