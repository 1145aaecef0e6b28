//! Policy config loader (strict parsing).
//!
//! Any unreadable, malformed or incomplete policy is a `GateError::Config`;
//! callers treat it as fatal at startup.

pub mod schema;

use std::fs;
use std::path::Path;

use agentgate_core::error::{GateError, Result};

pub use schema::{AuditSection, PolicyConfig, RateLimits};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<PolicyConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| GateError::Config(format!("read policy {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PolicyConfig> {
    let cfg: PolicyConfig = serde_yaml::from_str(s)
        .map_err(|e| GateError::Config(format!("invalid policy yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
