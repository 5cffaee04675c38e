//! Task store contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the durable `id -> Task` mapping contract.
//! - Isolate SQLite query details from boundary/sync orchestration.
//!
//! # Invariants
//! - Store writes must enforce task validation before persistence.
//! - Store APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod task_store;
