//! Admission verdicts and audit entries.
//!
//! `Admission` is the closed outcome set of a rate-limit check. `AuditEntry`
//! is the immutable record appended for every decision and every manual
//! governance action; its rendered form is
//! `[<ISO-8601 timestamp>] [<TAG>] <message>`.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Outcome of a rate-limit check. Checking never consumes quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    /// Fixed burst epoch exhausted.
    DeniedBurst,
    /// Sliding one-minute window full.
    DeniedWindow,
}

impl Admission {
    pub fn is_allowed(self) -> bool {
        matches!(self, Admission::Allowed)
    }
}

/// Tag carried by every audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditTag {
    Pass,
    Violation,
    ManualOverride,
    ApprovalGranted,
    ApprovalDenied,
}

impl AuditTag {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditTag::Pass => "PASS",
            AuditTag::Violation => "VIOLATION",
            AuditTag::ManualOverride => "MANUAL_OVERRIDE",
            AuditTag::ApprovalGranted => "APPROVAL_GRANTED",
            AuditTag::ApprovalDenied => "APPROVAL_DENIED",
        }
    }
}

impl fmt::Display for AuditTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags an external governance action may write without going through
/// validation. PASS and VIOLATION are reserved for the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualTag {
    Override,
    ApprovalGranted,
    ApprovalDenied,
}

impl From<ManualTag> for AuditTag {
    fn from(t: ManualTag) -> Self {
        match t {
            ManualTag::Override => AuditTag::ManualOverride,
            ManualTag::ApprovalGranted => AuditTag::ApprovalGranted,
            ManualTag::ApprovalDenied => AuditTag::ApprovalDenied,
        }
    }
}

/// One immutable audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub tag: AuditTag,
    pub message: String,
}

impl AuditEntry {
    pub fn new(timestamp: DateTime<Utc>, tag: AuditTag, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            tag,
            message: message.into(),
        }
    }

    pub fn is_violation(&self) -> bool {
        self.tag == AuditTag::Violation
    }

    /// Render as `[<timestamp>] [<TAG>] <message>`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
            self.tag,
            self.message
        )
    }
}
