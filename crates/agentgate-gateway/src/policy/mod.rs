//! Policy layer (allowlists, rate limiting, decision engine).
//!
//! Compiles the policy configuration into lookup structures and wires them,
//! together with the rate limiter and audit log, into the `Governor`.

pub mod allowlist;
pub mod engine;
pub mod ratelimit;

pub use engine::{Governor, PolicyDecision, Violation};
pub use ratelimit::RateLimiter;
