//! Snapshot substring filter.
//!
//! # Responsibility
//! - Narrow the unfiltered snapshot to tasks matching a free-text query.
//!
//! # Invariants
//! - Never touches the store; input snapshot is left unchanged.
//! - Matching is a case-insensitive substring test on the task name.
//! - Result order is the snapshot's relative order.
//! - An empty query yields the full snapshot.

use crate::model::task::Task;

/// Recomputes the working list from an unfiltered snapshot.
///
/// Idempotent and side-effect free; suitable for type-as-you-search use.
pub fn filter_tasks(snapshot: &[Task], query: &str) -> Vec<Task> {
    if query.is_empty() {
        return snapshot.to_vec();
    }

    let needle = query.to_lowercase();
    snapshot
        .iter()
        .filter(|task| task.task_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
