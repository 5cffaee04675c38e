//! Task use-case service and acknowledgement envelope.
//!
//! # Responsibility
//! - Wrap store results into the `{success, message}` shape returned at
//!   the boundary for every mutating call.
//! - Relay store error messages verbatim; the client shows them as-is.
//!
//! # Invariants
//! - Mutating entry points never propagate application-level store errors;
//!   they are folded into `success=false` envelopes.
//! - A failed mutation leaves the store unchanged.

use crate::model::task::{Task, TaskId};
use crate::store::task_store::{StoreResult, TaskStore};
use serde::{Deserialize, Serialize};

/// Acknowledgement envelope for mutating boundary calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAck {
    /// Whether the operation was applied.
    pub success: bool,
    /// Human-readable message relayed verbatim to the notification channel.
    pub message: String,
    /// Created task echoed back on successful create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl TaskAck {
    fn applied(message: impl Into<String>, task: Option<Task>) -> Self {
        Self {
            success: true,
            message: message.into(),
            task,
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            task: None,
        }
    }
}

/// Use-case service wrapper over a task store.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a task; validation failures become `success=false` envelopes.
    pub fn create_task(&self, task_name: &str, is_done: bool) -> TaskAck {
        match self.store.insert(task_name, is_done) {
            Ok(task) => TaskAck::applied("Task created successfully", Some(task)),
            Err(err) => TaskAck::rejected(err.to_string()),
        }
    }

    /// Returns the full collection in stable snapshot order.
    ///
    /// List has no envelope; a store failure here surfaces to the channel
    /// layer, which maps it to a transport error.
    pub fn fetch_all(&self) -> StoreResult<Vec<Task>> {
        self.store.get_all()
    }

    /// Replaces name and done flag on one task.
    pub fn update_task(&self, id: TaskId, task_name: &str, is_done: bool) -> TaskAck {
        match self.store.update_by_id(id, task_name, is_done) {
            Ok(()) => TaskAck::applied("Task updated successfully", None),
            Err(err) => TaskAck::rejected(err.to_string()),
        }
    }

    /// Deletes one task.
    pub fn delete_task(&self, id: TaskId) -> TaskAck {
        match self.store.delete_by_id(id) {
            Ok(()) => TaskAck::applied("Task deleted successfully", None),
            Err(err) => TaskAck::rejected(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskAck;

    #[test]
    fn rejected_envelope_carries_no_task() {
        let ack = TaskAck::rejected("task not found: x");
        assert!(!ack.success);
        assert!(ack.task.is_none());
        assert_eq!(ack.message, "task not found: x");
    }
}
