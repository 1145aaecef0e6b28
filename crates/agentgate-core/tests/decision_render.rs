#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use agentgate_core::decision::{Admission, AuditEntry, AuditTag, ManualTag};
use agentgate_core::error::GateError;
use chrono::{TimeZone, Utc};

#[test]
fn entry_renders_timestamp_tag_and_message() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    let e = AuditEntry::new(ts, AuditTag::Pass, "add executed in module 'math'");
    assert_eq!(
        e.render(),
        "[2026-03-01T09:30:00.000000Z] [PASS] add executed in module 'math'"
    );
}

#[test]
fn manual_tags_map_to_reserved_audit_tags() {
    assert_eq!(AuditTag::from(ManualTag::Override).as_str(), "MANUAL_OVERRIDE");
    assert_eq!(AuditTag::from(ManualTag::ApprovalGranted).as_str(), "APPROVAL_GRANTED");
    assert_eq!(AuditTag::from(ManualTag::ApprovalDenied).as_str(), "APPROVAL_DENIED");
}

#[test]
fn only_violation_entries_report_as_violations() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    assert!(AuditEntry::new(ts, AuditTag::Violation, "x").is_violation());
    assert!(!AuditEntry::new(ts, AuditTag::ManualOverride, "x").is_violation());
}

#[test]
fn tag_serializes_in_screaming_snake_case() {
    let s = serde_json::to_string(&AuditTag::ApprovalDenied).unwrap();
    assert_eq!(s, "\"APPROVAL_DENIED\"");
}

#[test]
fn admission_allowed_only_for_allowed() {
    assert!(Admission::Allowed.is_allowed());
    assert!(!Admission::DeniedBurst.is_allowed());
    assert!(!Admission::DeniedWindow.is_allowed());
}

#[test]
fn config_error_maps_to_config_code() {
    let err = GateError::Config("missing rate_limits".into());
    assert_eq!(err.client_code().as_str(), "CONFIG");
    assert_eq!(err.to_string(), "config error: missing rate_limits");
}
