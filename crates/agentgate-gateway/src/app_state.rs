//! Shared application state for the agentgate HTTP surface.

use std::sync::Arc;

use agentgate_core::error::Result;

use crate::config::PolicyConfig;
use crate::obs::GovernanceMetrics;
use crate::policy::Governor;

#[derive(Clone)]
pub struct AppState {
    governor: Arc<Governor>,
}

impl AppState {
    /// Build application state from a validated policy.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: &PolicyConfig) -> Result<Self> {
        Ok(Self::from_governor(Arc::new(Governor::new(cfg)?)))
    }

    pub fn from_governor(governor: Arc<Governor>) -> Self {
        Self { governor }
    }

    pub fn governor(&self) -> Arc<Governor> {
        Arc::clone(&self.governor)
    }

    pub fn metrics(&self) -> Arc<GovernanceMetrics> {
        self.governor.metrics()
    }

    /// Gauge lines derived from the current rate-limit status.
    pub fn metrics_gauges(&self) -> Vec<(&'static str, i64)> {
        let status = self.governor.status();
        vec![
            ("agentgate_requests_last_minute", status.requests_last_minute as i64),
            ("agentgate_remaining_requests", status.remaining_requests),
            ("agentgate_audit_entries", self.governor.audit_len() as i64),
        ]
    }
}
