//! Local search entry points.
//!
//! # Responsibility
//! - Expose snapshot filtering used by the client mirror.
//! - Keep result shaping deterministic and free of store access.

pub mod filter;
