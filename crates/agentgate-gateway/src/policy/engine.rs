use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use chrono::{DateTime, Utc};

use agentgate_core::decision::{Admission, AuditEntry, AuditTag, ManualTag};
use agentgate_core::error::Result;

use crate::alert::{AlertSink, TracingAlertSink};
use crate::audit::AuditLog;
use crate::config::PolicyConfig;
use crate::obs::GovernanceMetrics;
use crate::status::RateLimitStatus;

use super::allowlist::Allowlist;
use super::ratelimit::RateLimiter;

/// Why a request was denied. Only observable through the audit log,
/// alerts and metrics; callers of `validate` just see `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    BurstLimit,
    WindowLimit,
    UnauthorizedModule,
    RestrictedAction,
}

impl Violation {
    pub fn as_str(self) -> &'static str {
        match self {
            Violation::BurstLimit => "burst_limit",
            Violation::WindowLimit => "window_limit",
            Violation::UnauthorizedModule => "unauthorized_module",
            Violation::RestrictedAction => "restricted_action",
        }
    }
}

/// Result of one validation, as recorded in the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    Pass,
    Deny(Violation),
}

/// Everything mutable, behind one lock so the burst epoch, the sliding
/// window and the audit order are always observed together.
struct EngineState {
    limiter: RateLimiter,
    audit: AuditLog,
}

/// The governance chokepoint: rate limit, allowlist, audit.
/// Construct once at startup, then share via Arc.
pub struct Governor {
    allowlist: Allowlist,
    state: Mutex<EngineState>,
    alerts: Arc<dyn AlertSink>,
    metrics: Arc<GovernanceMetrics>,
}

impl Governor {
    pub fn new(cfg: &PolicyConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            allowlist: Allowlist::compile(cfg),
            state: Mutex::new(EngineState {
                limiter: RateLimiter::new(cfg.rate_limits),
                audit: AuditLog::new(cfg.audit.max_entries),
            }),
            alerts: Arc::new(TracingAlertSink),
            metrics: Arc::new(GovernanceMetrics::default()),
        })
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let cfg = crate::config::load_from_file(path)?;
        Self::new(&cfg)
    }

    pub fn with_alert_sink(mut self, sink: Arc<dyn AlertSink>) -> Self {
        self.alerts = sink;
        self
    }

    pub fn metrics(&self) -> Arc<GovernanceMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Gate an action at the current wall-clock time.
    pub fn validate(&self, action: &str, module: &str) -> bool {
        self.validate_at(action, module, Utc::now())
    }

    /// Gate an action at `now`. Appends exactly one audit entry.
    pub fn validate_at(&self, action: &str, module: &str, now: DateTime<Utc>) -> bool {
        let started = Instant::now();

        let (decision, entry) = {
            let mut st = self.lock_state();
            let (decision, entry) = self.decide(&mut st, action, module, now);
            st.audit.append(entry.clone());
            (decision, entry)
        };

        self.metrics
            .validate_duration
            .observe(&[], started.elapsed());

        match decision {
            PolicyDecision::Pass => {
                self.metrics.decisions.inc(&[("outcome", "pass"), ("reason", "ok")]);
                tracing::debug!(action, module, "action admitted");
                true
            }
            PolicyDecision::Deny(v) => {
                self.metrics
                    .decisions
                    .inc(&[("outcome", "violation"), ("reason", v.as_str())]);
                tracing::warn!(action, module, reason = v.as_str(), "action denied");
                self.alerts.alert(&entry.render());
                false
            }
        }
    }

    /// Check-then-record under the caller's guard. Quota is consumed only
    /// when every check passes.
    fn decide(
        &self,
        st: &mut EngineState,
        action: &str,
        module: &str,
        now: DateTime<Utc>,
    ) -> (PolicyDecision, AuditEntry) {
        let deny = |v: Violation, msg: String| {
            (PolicyDecision::Deny(v), AuditEntry::new(now, AuditTag::Violation, msg))
        };

        match st.limiter.check(now) {
            Admission::Allowed => {}
            Admission::DeniedBurst => {
                let limit = st.limiter.burst_limit();
                return deny(
                    Violation::BurstLimit,
                    format!("Rate limit exceeded: burst limit ({limit}) reached"),
                );
            }
            Admission::DeniedWindow => {
                let max = st.limiter.max_requests_per_minute();
                return deny(
                    Violation::WindowLimit,
                    format!("Rate limit exceeded: {max} requests/minute limit reached"),
                );
            }
        }

        if !self.allowlist.is_module_allowed(module) {
            return deny(Violation::UnauthorizedModule, format!("Unauthorized module: {module}"));
        }

        if self.allowlist.is_action_restricted(action) {
            return deny(Violation::RestrictedAction, format!("Restricted action blocked: {action}"));
        }

        st.limiter.record(now);
        (
            PolicyDecision::Pass,
            AuditEntry::new(
                now,
                AuditTag::Pass,
                format!("{action} executed in module '{module}'"),
            ),
        )
    }

    /// Record a manual governance action (override, approval grant/deny).
    /// Bypasses rate limiting and allowlists.
    pub fn append_manual(&self, tag: ManualTag, action: &str, module: &str, reason: Option<&str>) {
        self.append_manual_at(tag, action, module, reason, Utc::now());
    }

    pub fn append_manual_at(
        &self,
        tag: ManualTag,
        action: &str,
        module: &str,
        reason: Option<&str>,
        now: DateTime<Utc>,
    ) {
        let mut message = format!("{action} in module '{module}'");
        if let Some(r) = reason {
            message.push_str(" - Reason: ");
            message.push_str(r);
        }
        let tag = AuditTag::from(tag);

        self.lock_state().audit.append(AuditEntry::new(now, tag, message));

        self.metrics.manual_entries.inc(&[("tag", tag.as_str())]);
        tracing::info!(action, module, tag = tag.as_str(), "manual governance entry");
    }

    /// Rendered audit log, optionally VIOLATION entries only. Always a copy.
    pub fn audit_log(&self, violations_only: bool) -> Vec<String> {
        self.lock_state().audit.query(violations_only)
    }

    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.lock_state().audit.snapshot()
    }

    pub fn audit_len(&self) -> usize {
        self.lock_state().audit.len()
    }

    pub fn status(&self) -> RateLimitStatus {
        self.status_at(Utc::now())
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> RateLimitStatus {
        RateLimitStatus::from_limiter(&self.lock_state().limiter, now)
    }

    // A holder can only panic between whole-field updates, so the state
    // behind a poisoned lock is still consistent; recover the guard.
    fn lock_state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
