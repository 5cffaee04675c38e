//! Core domain logic for taskpad.
//! This crate is the single source of truth for task-list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;
pub mod sync;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use search::filter::filter_tasks;
pub use service::task_service::{TaskAck, TaskService};
pub use store::task_store::{SqliteTaskStore, StoreError, StoreResult, TaskStore};
pub use sync::client::{ChannelResult, InProcessStoreClient, StoreClient, TransportError};
pub use sync::session::{NoticeLevel, Notifier, SyncSession};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
