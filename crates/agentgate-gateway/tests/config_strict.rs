#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use agentgate_gateway::config;

#[test]
fn ok_minimal_policy() {
    let ok = r#"
allowed_modules: ["math", "http_request"]
restricted_actions: ["delete_database"]
rate_limits:
  max_requests_per_minute: 5
  burst_limit: 3
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.allowed_modules, vec!["math", "http_request"]);
    assert_eq!(cfg.rate_limits.max_requests_per_minute, 5);
    assert_eq!(cfg.rate_limits.burst_limit, 3);
    assert_eq!(cfg.audit.max_entries, None);
}

#[test]
fn missing_rate_limit_key_is_config_error() {
    let bad = r#"
allowed_modules: ["math"]
restricted_actions: []
rate_limits:
  max_requests_per_minute: 5
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn missing_allowed_modules_is_config_error() {
    let bad = r#"
restricted_actions: []
rate_limits: { max_requests_per_minute: 5, burst_limit: 3 }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
allowed_modules: ["math"]
restricted_actions: []
rate_limits:
  max_requests_per_minute: 5
  burst_limt: 3 # typo should fail
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn wrong_type_is_config_error() {
    let bad = r#"
allowed_modules: "math"
restricted_actions: []
rate_limits: { max_requests_per_minute: 5, burst_limit: 3 }
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn non_positive_limits_rejected() {
    let zero_burst = r#"
allowed_modules: ["math"]
restricted_actions: []
rate_limits: { max_requests_per_minute: 5, burst_limit: 0 }
"#;
    assert!(config::load_from_str(zero_burst).is_err());

    let negative = r#"
allowed_modules: ["math"]
restricted_actions: []
rate_limits: { max_requests_per_minute: -1, burst_limit: 3 }
"#;
    assert!(config::load_from_str(negative).is_err());
}

#[test]
fn audit_cap_is_optional_but_positive() {
    let capped = r#"
allowed_modules: ["math"]
restricted_actions: []
rate_limits: { max_requests_per_minute: 5, burst_limit: 3 }
audit: { max_entries: 100 }
"#;
    let cfg = config::load_from_str(capped).expect("must parse");
    assert_eq!(cfg.audit.max_entries, Some(100));

    let zero = capped.replace("100", "0");
    assert!(config::load_from_str(&zero).is_err());
}

#[test]
fn unreadable_file_is_config_error() {
    let err = config::load_from_file("/nonexistent/agent_policy.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG");
}

#[test]
fn load_from_file_reads_yaml() {
    let path = std::env::temp_dir().join(format!("agentgate-policy-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "allowed_modules: [math]\nrestricted_actions: [delete_database]\nrate_limits:\n  max_requests_per_minute: 10\n  burst_limit: 4\n",
    )
    .unwrap();

    let cfg = config::load_from_file(&path).expect("must load");
    assert_eq!(cfg.restricted_actions, vec!["delete_database"]);
    assert_eq!(cfg.rate_limits.burst_limit, 4);

    let _ = std::fs::remove_file(&path);
}
