//! Read-only projection of rate-limiter state for monitoring.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::policy::ratelimit::{RateLimiter, WINDOW_SECS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateLimitStatus {
    pub requests_last_minute: u64,
    pub max_requests_per_minute: u32,
    /// Not clamped; may go negative.
    pub remaining_requests: i64,
    /// `"<current_burst>/<burst_limit>"`.
    pub burst_usage: String,
    /// Seconds until the oldest admission leaves the window, 2 decimals.
    pub time_until_rate_reset: f64,
}

impl RateLimitStatus {
    pub fn from_limiter(limiter: &RateLimiter, now: DateTime<Utc>) -> Self {
        let requests_last_minute = limiter.requests_since_window_start(now) as u64;
        let max = limiter.max_requests_per_minute();

        let time_until_rate_reset = match limiter.oldest_request() {
            Some(oldest) => {
                let elapsed = (now - oldest).num_milliseconds() as f64 / 1000.0;
                round2((WINDOW_SECS as f64 - elapsed).max(0.0))
            }
            None => 0.0,
        };

        Self {
            requests_last_minute,
            max_requests_per_minute: max,
            remaining_requests: i64::from(max) - requests_last_minute as i64,
            burst_usage: format!("{}/{}", limiter.current_burst(), limiter.burst_limit()),
            time_until_rate_reset,
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
