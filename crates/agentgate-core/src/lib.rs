//! agentgate core: error surface and governance decision primitives.
//!
//! This crate defines the admission verdicts, the audit entry model and the
//! error types shared by the engine, the HTTP surface and any embedding
//! service. It intentionally carries no runtime or transport dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `GateError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decision;
pub mod error;

/// Shared result type.
pub use error::{GateError, Result};
