//! Top-level facade crate for agentgate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use agentgate_core::*;
}

pub mod gateway {
    pub use agentgate_gateway::*;
}

pub use agentgate_core::decision::{Admission, AuditEntry, AuditTag, ManualTag};
pub use agentgate_gateway::{Governor, RateLimitStatus};
