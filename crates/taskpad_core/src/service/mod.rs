//! Boundary-facing use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into the request/response envelopes the
//!   client sees.
//! - Keep sync/UI layers decoupled from storage details.

pub mod task_service;
