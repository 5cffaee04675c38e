//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted by the task store.
//! - Enforce field contracts before any persistence write.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `task_name` is non-blank for every validated task.
//! - Serialized field names match the external JSON schema
//!   (`id` / `taskName` / `isDone`).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every persisted task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Field-contract violations rejected before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// `task_name` is empty or whitespace-only.
    EmptyName,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// One shape is shared by the store, the boundary envelope and the client
/// mirror; there are no partial or projected variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable store-assigned ID used for all later mutations.
    pub id: TaskId,
    /// Short text label shown in the list.
    #[serde(rename = "taskName")]
    pub task_name: String,
    /// Completion flag.
    #[serde(rename = "isDone")]
    pub is_done: bool,
}

impl Task {
    /// Creates a not-yet-done task with a generated stable ID.
    pub fn new(task_name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), task_name, false)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by store read paths where identity already exists in storage.
    pub fn with_id(id: TaskId, task_name: impl Into<String>, is_done: bool) -> Self {
        Self {
            id,
            task_name: task_name.into(),
            is_done,
        }
    }

    /// Checks field contracts for this record.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_task_name(&self.task_name)
    }
}

/// Validates a task name according to the store contract.
///
/// Duplicate names are allowed; only blank names are rejected.
pub fn validate_task_name(name: &str) -> Result<(), TaskValidationError> {
    if name.trim().is_empty() {
        return Err(TaskValidationError::EmptyName);
    }
    Ok(())
}
