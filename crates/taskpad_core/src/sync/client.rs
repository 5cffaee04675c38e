//! Request/response channel to the task store.
//!
//! # Responsibility
//! - Define the boundary contract the sync session depends on.
//! - Separate transport failures (the call itself failed) from
//!   application-level rejections (`success=false` envelopes).
//!
//! # Invariants
//! - Mutating calls return an acknowledgement envelope on any completed
//!   round trip, success or not.
//! - Transport failures never carry a server message.

use crate::model::task::{Task, TaskId};
use crate::service::task_service::{TaskAck, TaskService};
use crate::store::task_store::TaskStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ChannelResult<T> = Result<T, TransportError>;

/// Failure of the channel itself: the request never completed.
///
/// Application-level rejections are not transport errors; those arrive
/// as `success=false` inside [`TaskAck`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// Boundary operation that failed (`create|list|update|delete`).
    pub operation: &'static str,
    /// Underlying cause, kept for diagnostics only.
    pub detail: String,
}

impl TransportError {
    pub fn new(operation: &'static str, detail: impl Into<String>) -> Self {
        Self {
            operation,
            detail: detail.into(),
        }
    }
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "transport failure during {}: {}",
            self.operation, self.detail
        )
    }
}

impl Error for TransportError {}

/// Channel contract between the client mirror and the server-of-record.
pub trait StoreClient {
    /// Requests creation of a new task.
    fn create_task(&self, task_name: &str, is_done: bool) -> ChannelResult<TaskAck>;
    /// Fetches the full collection in snapshot order.
    fn list_tasks(&self) -> ChannelResult<Vec<Task>>;
    /// Requests replacement of name and done flag on one task.
    fn update_task(&self, id: TaskId, task_name: &str, is_done: bool) -> ChannelResult<TaskAck>;
    /// Requests deletion of one task.
    fn delete_task(&self, id: TaskId) -> ChannelResult<TaskAck>;
}

impl<C: StoreClient + ?Sized> StoreClient for &C {
    fn create_task(&self, task_name: &str, is_done: bool) -> ChannelResult<TaskAck> {
        (**self).create_task(task_name, is_done)
    }

    fn list_tasks(&self) -> ChannelResult<Vec<Task>> {
        (**self).list_tasks()
    }

    fn update_task(&self, id: TaskId, task_name: &str, is_done: bool) -> ChannelResult<TaskAck> {
        (**self).update_task(id, task_name, is_done)
    }

    fn delete_task(&self, id: TaskId) -> ChannelResult<TaskAck> {
        (**self).delete_task(id)
    }
}

/// Channel serving a store in the same process.
///
/// Mutations cannot fail at transport level here; store rejections arrive
/// as envelopes exactly as they would over a remote channel. A list-side
/// store failure is what a remote server would report as a failed request,
/// so it maps to [`TransportError`].
pub struct InProcessStoreClient<S: TaskStore> {
    service: TaskService<S>,
}

impl<S: TaskStore> InProcessStoreClient<S> {
    pub fn new(service: TaskService<S>) -> Self {
        Self { service }
    }

    /// Convenience constructor straight from a store implementation.
    pub fn from_store(store: S) -> Self {
        Self::new(TaskService::new(store))
    }
}

impl<S: TaskStore> StoreClient for InProcessStoreClient<S> {
    fn create_task(&self, task_name: &str, is_done: bool) -> ChannelResult<TaskAck> {
        Ok(self.service.create_task(task_name, is_done))
    }

    fn list_tasks(&self) -> ChannelResult<Vec<Task>> {
        self.service
            .fetch_all()
            .map_err(|err| TransportError::new("list", err.to_string()))
    }

    fn update_task(&self, id: TaskId, task_name: &str, is_done: bool) -> ChannelResult<TaskAck> {
        Ok(self.service.update_task(id, task_name, is_done))
    }

    fn delete_task(&self, id: TaskId) -> ChannelResult<TaskAck> {
        Ok(self.service.delete_task(id))
    }
}
