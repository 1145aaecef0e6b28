//! Two-tier admission control: a fixed burst epoch plus a sliding one-minute
//! window.
//!
//! The two mechanisms are independent. The burst epoch counts admissions since
//! `burst_window_start` and resets wholesale once 60s have elapsed; the
//! sliding window keeps the timestamp of every admission and forgets entries
//! older than 60s.
//!
//! `check` never consumes quota. Only `record` does, and the validator calls
//! it after every other policy check has approved the request.
//!
//! This type is not synchronized. The engine owns it behind the same lock
//! as the audit log.

use std::collections::VecDeque;

use chrono::{DateTime, TimeDelta, Utc};

use agentgate_core::decision::Admission;

use crate::config::RateLimits;

/// Length of both the burst epoch and the sliding window.
pub const WINDOW_SECS: i64 = 60;

fn window() -> TimeDelta {
    TimeDelta::seconds(WINDOW_SECS)
}

/// Oldest instant still inside the window ending at `now`. `None` when `now`
/// is within 60s of the earliest representable instant: nothing has expired.
fn window_cutoff(now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    now.checked_sub_signed(window())
}

#[derive(Debug)]
pub struct RateLimiter {
    max_requests_per_minute: u32,
    burst_limit: u32,

    /// Admission timestamps, oldest first.
    request_times: VecDeque<DateTime<Utc>>,
    current_burst: u32,
    burst_window_start: Option<DateTime<Utc>>,
}

impl RateLimiter {
    pub fn new(limits: RateLimits) -> Self {
        Self {
            max_requests_per_minute: limits.max_requests_per_minute,
            burst_limit: limits.burst_limit,
            request_times: VecDeque::new(),
            current_burst: 0,
            burst_window_start: None,
        }
    }

    /// Decide whether a request may proceed at `now`.
    ///
    /// Burst is evaluated strictly before the sliding window. Housekeeping
    /// (lazy epoch start, epoch rollover, eviction of expired timestamps)
    /// happens here, but no admission is counted.
    pub fn check(&mut self, now: DateTime<Utc>) -> Admission {
        let start = *self.burst_window_start.get_or_insert(now);

        if now - start >= window() {
            self.current_burst = 0;
            self.burst_window_start = Some(now);
        }

        if self.current_burst >= self.burst_limit {
            return Admission::DeniedBurst;
        }

        if let Some(cutoff) = window_cutoff(now) {
            while self.request_times.front().is_some_and(|t| *t < cutoff) {
                self.request_times.pop_front();
            }
        }

        if self.request_times.len() >= self.max_requests_per_minute as usize {
            return Admission::DeniedWindow;
        }

        Admission::Allowed
    }

    /// Count one admission against both mechanisms. Does not re-check limits.
    pub fn record(&mut self, now: DateTime<Utc>) {
        self.request_times.push_back(now);
        self.current_burst = self.current_burst.saturating_add(1);
    }

    pub fn max_requests_per_minute(&self) -> u32 {
        self.max_requests_per_minute
    }

    pub fn burst_limit(&self) -> u32 {
        self.burst_limit
    }

    pub fn current_burst(&self) -> u32 {
        self.current_burst
    }

    pub fn burst_window_start(&self) -> Option<DateTime<Utc>> {
        self.burst_window_start
    }

    /// Admissions with a timestamp in `[now - 60s, ..]`. Does not evict.
    pub fn requests_since_window_start(&self, now: DateTime<Utc>) -> usize {
        match window_cutoff(now) {
            Some(cutoff) => self.request_times.iter().filter(|t| **t >= cutoff).count(),
            None => self.request_times.len(),
        }
    }

    pub fn oldest_request(&self) -> Option<DateTime<Utc>> {
        self.request_times.front().copied()
    }
}
