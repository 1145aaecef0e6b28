use serde::Deserialize;
use agentgate_core::error::{GateError, Result};

/// Governance policy, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub allowed_modules: Vec<String>,
    pub restricted_actions: Vec<String>,
    pub rate_limits: RateLimits,

    #[serde(default)]
    pub audit: AuditSection,
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<()> {
        self.rate_limits.validate()?;
        self.audit.validate()?;

        for m in &self.allowed_modules {
            if m.trim().is_empty() {
                return Err(GateError::Config("allowed_modules must not contain blank entries".into()));
            }
        }
        for a in &self.restricted_actions {
            if a.trim().is_empty() {
                return Err(GateError::Config("restricted_actions must not contain blank entries".into()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimits {
    /// Sliding one-minute window capacity.
    pub max_requests_per_minute: u32,
    /// Admissions allowed per fixed 60s burst epoch.
    pub burst_limit: u32,
}

impl RateLimits {
    pub fn validate(&self) -> Result<()> {
        if self.max_requests_per_minute == 0 {
            return Err(GateError::Config(
                "rate_limits.max_requests_per_minute must be positive".into(),
            ));
        }
        if self.burst_limit == 0 {
            return Err(GateError::Config("rate_limits.burst_limit must be positive".into()));
        }
        Ok(())
    }
}

/// Audit retention. `max_entries: None` keeps every entry for the process lifetime.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditSection {
    #[serde(default)]
    pub max_entries: Option<usize>,
}

impl AuditSection {
    pub fn validate(&self) -> Result<()> {
        if self.max_entries == Some(0) {
            return Err(GateError::Config("audit.max_entries must be positive when set".into()));
        }
        Ok(())
    }
}
