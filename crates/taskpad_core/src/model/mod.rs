//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, boundary and sync code.
//! - Keep field validation next to the data it protects.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard delete; there are no tombstones or versions.

pub mod task;
