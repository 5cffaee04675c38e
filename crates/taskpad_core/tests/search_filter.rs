use taskpad_core::{filter_tasks, Task};

fn snapshot() -> Vec<Task> {
    vec![
        Task::new("Buy oat milk"),
        Task::new("Walk dog"),
        Task::new("Call Oana"),
        Task::new("Water plants"),
    ]
}

#[test]
fn empty_query_returns_snapshot_unchanged() {
    let snapshot = snapshot();
    assert_eq!(filter_tasks(&snapshot, ""), snapshot);
}

#[test]
fn query_matches_case_insensitive_substring() {
    let snapshot = snapshot();

    let hits = filter_tasks(&snapshot, "oa");
    let names: Vec<&str> = hits.iter().map(|task| task.task_name.as_str()).collect();
    assert_eq!(names, vec!["Buy oat milk", "Call Oana"]);

    let upper = filter_tasks(&snapshot, "OA");
    assert_eq!(upper, hits);
}

#[test]
fn result_preserves_snapshot_order() {
    let snapshot = snapshot();
    let hits = filter_tasks(&snapshot, "a");

    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| {
            snapshot
                .iter()
                .position(|task| task.id == hit.id)
                .expect("hit must come from the snapshot")
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn no_match_yields_empty_list() {
    let snapshot = snapshot();
    assert!(filter_tasks(&snapshot, "zzz").is_empty());
}

#[test]
fn filter_is_idempotent() {
    let snapshot = snapshot();
    let once = filter_tasks(&snapshot, "oat");
    let twice = filter_tasks(&once, "oat");
    assert_eq!(once, twice);
}

#[test]
fn done_flag_does_not_affect_matching() {
    let mut snapshot = snapshot();
    snapshot[0].is_done = true;

    let hits = filter_tasks(&snapshot, "oat");
    assert_eq!(hits.len(), 1);
    assert!(hits[0].is_done);
}
