#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use agentgate_core::decision::Admission;
use agentgate_gateway::config::RateLimits;
use agentgate_gateway::policy::RateLimiter;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

fn secs(s: i64) -> TimeDelta {
    TimeDelta::seconds(s)
}

fn limiter(max: u32, burst: u32) -> RateLimiter {
    RateLimiter::new(RateLimits {
        max_requests_per_minute: max,
        burst_limit: burst,
    })
}

#[test]
fn check_alone_never_consumes_quota() {
    let mut rl = limiter(2, 2);
    for _ in 0..10 {
        assert_eq!(rl.check(t0()), Admission::Allowed);
    }
    assert_eq!(rl.current_burst(), 0);
    assert_eq!(rl.requests_since_window_start(t0()), 0);
}

#[test]
fn first_check_starts_burst_epoch() {
    let mut rl = limiter(5, 3);
    assert_eq!(rl.burst_window_start(), None);
    rl.check(t0() + secs(7));
    assert_eq!(rl.burst_window_start(), Some(t0() + secs(7)));
}

#[test]
fn burst_is_checked_before_window() {
    let mut rl = limiter(2, 2);
    rl.record(t0());
    rl.record(t0());
    // both limits are exhausted; burst wins the tie
    assert_eq!(rl.check(t0()), Admission::DeniedBurst);
}

#[test]
fn burst_epoch_resets_after_sixty_seconds() {
    let mut rl = limiter(100, 3);
    assert_eq!(rl.check(t0()), Admission::Allowed);
    for _ in 0..3 {
        rl.record(t0());
    }
    assert_eq!(rl.check(t0() + secs(59)), Admission::DeniedBurst);

    assert_eq!(rl.check(t0() + secs(60)), Admission::Allowed);
    assert_eq!(rl.current_burst(), 0);
    assert_eq!(rl.burst_window_start(), Some(t0() + secs(60)));
    // sliding window still holds the previous epoch's admissions
    assert_eq!(rl.requests_since_window_start(t0() + secs(60)), 3);
}

#[test]
fn sliding_window_evicts_only_expired_entries() {
    let mut rl = limiter(3, 100);
    rl.check(t0());
    rl.record(t0());
    rl.record(t0() + secs(10));
    rl.record(t0() + secs(20));

    assert_eq!(rl.check(t0() + secs(30)), Admission::DeniedWindow);
    // an entry exactly 60s old is still inside the window
    assert_eq!(rl.check(t0() + secs(60)), Admission::DeniedWindow);
    assert_eq!(rl.check(t0() + secs(61)), Admission::Allowed);
    assert_eq!(rl.oldest_request(), Some(t0() + secs(10)));
}

#[test]
fn window_count_is_read_only() {
    let mut rl = limiter(5, 5);
    rl.check(t0());
    rl.record(t0());
    rl.record(t0() + secs(30));

    assert_eq!(rl.requests_since_window_start(t0() + secs(70)), 1);
    // not evicted by the read
    assert_eq!(rl.oldest_request(), Some(t0()));
}

#[test]
fn earliest_representable_instant_has_nothing_to_evict() {
    let mut rl = limiter(2, 5);
    let earliest = DateTime::<Utc>::MIN_UTC;

    assert_eq!(rl.check(earliest), Admission::Allowed);
    rl.record(earliest);
    assert_eq!(rl.requests_since_window_start(earliest), 1);
    assert_eq!(rl.check(earliest + secs(1)), Admission::Allowed);
    rl.record(earliest + secs(1));
    assert_eq!(rl.check(earliest + secs(2)), Admission::DeniedWindow);
}
