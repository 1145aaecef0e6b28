//! agentgate governance library entry.
//!
//! This crate wires the policy loader, the rate limiter, the audit log and
//! the decision engine into one `Governor`, and exposes it over a thin HTTP
//! surface. It is intended to be consumed by the binary (`main.rs`), by
//! embedding services, and by integration tests.

pub mod alert;
pub mod api;
pub mod app_state;
pub mod audit;
pub mod config;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod router;
pub mod status;

pub use policy::Governor;
pub use status::RateLimitStatus;
