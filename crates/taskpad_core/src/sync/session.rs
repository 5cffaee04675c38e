//! Client mirror of the task collection.
//!
//! # Responsibility
//! - Hold the working list, the unfiltered snapshot, the pending-edit
//!   selection and the current input text as one explicit state struct.
//! - Reconcile every mutation with the store via an unconditional full
//!   refetch (pull-based reconciliation).
//!
//! # Invariants
//! - Every mutation path ends in a refresh attempt, success or failure.
//! - A mutation+refresh pair runs to completion under one exclusive
//!   borrow of the session; overlapping pairs cannot be issued.
//! - Transport errors surface as fixed generic notices and are logged;
//!   application rejections relay the server message verbatim.
//! - The rendering path only ever reads session state; it never sees an
//!   error value.

use crate::model::task::{Task, TaskId};
use crate::search::filter::filter_tasks;
use crate::service::task_service::TaskAck;
use crate::sync::client::{StoreClient, TransportError};
use log::error;

const CREATE_FAILURE_NOTICE: &str = "Failed to create task";
const UPDATE_FAILURE_NOTICE: &str = "Failed to update task";
const DELETE_FAILURE_NOTICE: &str = "Failed to delete task";
const FETCH_FAILURE_NOTICE: &str = "Failed to fetch tasks";

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Fire-and-forget notification capability injected into the session.
///
/// Implementations must not block and must not call back into the session.
pub trait Notifier {
    fn notify(&self, message: &str, level: NoticeLevel);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, level: NoticeLevel) {
        (**self).notify(message, level);
    }
}

/// Client-held mirror of the full task collection.
///
/// The session owns all mutable UI state; rendering code reads it through
/// the accessor methods and never holds its own copies.
pub struct SyncSession<C: StoreClient, N: Notifier> {
    client: C,
    notifier: N,
    working_list: Vec<Task>,
    snapshot: Vec<Task>,
    pending_edit: Option<Task>,
    input_text: String,
}

impl<C: StoreClient, N: Notifier> SyncSession<C, N> {
    /// Creates an empty session; call [`refresh`](Self::refresh) to load
    /// the initial collection.
    pub fn new(client: C, notifier: N) -> Self {
        Self {
            client,
            notifier,
            working_list: Vec::new(),
            snapshot: Vec::new(),
            pending_edit: None,
            input_text: String::new(),
        }
    }

    /// Currently displayed tasks, possibly narrowed by a search filter.
    pub fn working_list(&self) -> &[Task] {
        &self.working_list
    }

    /// Last full, unfiltered fetch.
    pub fn snapshot(&self) -> &[Task] {
        &self.snapshot
    }

    /// Task currently selected for in-place editing, if any.
    pub fn pending_edit(&self) -> Option<&Task> {
        self.pending_edit.as_ref()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// Routes the current input either into task creation or into the
    /// pending edit, then clears the input regardless of outcome.
    ///
    /// Empty input is a no-op.
    pub fn submit_input(&mut self) {
        if self.input_text.is_empty() {
            return;
        }

        let input = std::mem::take(&mut self.input_text);
        match self.pending_edit.clone() {
            Some(pending) => self.commit_edit(&pending, &input),
            None => self.create_task(&input),
        }
    }

    /// Selects a displayed task for editing and copies its name into the
    /// input. Does not touch the store.
    ///
    /// Returns false when the id is not in the working list.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.find_displayed(id) else {
            return false;
        };
        self.input_text = task.task_name.clone();
        self.pending_edit = Some(task);
        true
    }

    /// Flips the done flag on a displayed task, preserving its name.
    pub fn toggle_done(&mut self, id: TaskId) {
        let Some(task) = self.find_displayed(id) else {
            return;
        };

        match self
            .client
            .update_task(task.id, &task.task_name, !task.is_done)
        {
            Ok(ack) => self.notify_ack(&ack),
            Err(err) => self.report_transport("task_toggle", UPDATE_FAILURE_NOTICE, &err),
        }
        self.refresh();
    }

    /// Requests deletion of a task and re-syncs.
    pub fn delete_task(&mut self, id: TaskId) {
        match self.client.delete_task(id) {
            Ok(ack) => self.notify_ack(&ack),
            Err(err) => self.report_transport("task_delete", DELETE_FAILURE_NOTICE, &err),
        }
        self.refresh();
    }

    /// Replaces working list and snapshot with a fresh full fetch.
    ///
    /// An active search filter is not reapplied. On failure both lists are
    /// left unchanged; no partial merge is attempted.
    pub fn refresh(&mut self) {
        match self.client.list_tasks() {
            Ok(tasks) => {
                self.working_list = tasks.clone();
                self.snapshot = tasks;
            }
            Err(err) => self.report_transport("task_fetch", FETCH_FAILURE_NOTICE, &err),
        }
    }

    /// Narrows the working list to snapshot entries whose name contains
    /// the query, case-insensitively. Purely local.
    pub fn search(&mut self, query: &str) {
        self.working_list = filter_tasks(&self.snapshot, query);
    }

    fn create_task(&mut self, task_name: &str) {
        match self.client.create_task(task_name, false) {
            Ok(ack) => self.notify_ack(&ack),
            Err(err) => self.report_transport("task_create", CREATE_FAILURE_NOTICE, &err),
        }
        self.refresh();
    }

    fn commit_edit(&mut self, pending: &Task, task_name: &str) {
        match self
            .client
            .update_task(pending.id, task_name, pending.is_done)
        {
            Ok(ack) => {
                // A rejected edit keeps the selection so the retry still
                // targets the same task.
                if ack.success {
                    self.pending_edit = None;
                }
                self.notify_ack(&ack);
            }
            Err(err) => self.report_transport("task_update", UPDATE_FAILURE_NOTICE, &err),
        }
        self.refresh();
    }

    fn find_displayed(&self, id: TaskId) -> Option<Task> {
        self.working_list.iter().find(|task| task.id == id).cloned()
    }

    fn notify_ack(&self, ack: &TaskAck) {
        let level = if ack.success {
            NoticeLevel::Success
        } else {
            NoticeLevel::Error
        };
        self.notifier.notify(&ack.message, level);
    }

    fn report_transport(&self, event: &str, notice: &str, err: &TransportError) {
        error!("event={event} module=sync status=error error={err}");
        self.notifier.notify(notice, NoticeLevel::Error);
    }
}
