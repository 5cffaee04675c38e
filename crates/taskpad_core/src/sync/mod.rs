//! Client-side synchronization with the server-of-record.
//!
//! # Responsibility
//! - Define the request/response channel the client talks through.
//! - Keep the client's task mirror eventually consistent with the store
//!   via full refetch after every mutation.
//!
//! # Invariants
//! - Immediately after any successful refresh, working list and snapshot
//!   are element-wise equal.
//! - No store error reaches the rendering path; everything is folded into
//!   notifications.

pub mod client;
pub mod session;
