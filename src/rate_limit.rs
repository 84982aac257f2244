use std::time::{Duration, Instant};

use dashmap::DashMap;

/// A fixed-window request throttle keyed by client address.
///
/// Counters live in process memory and reset when their window elapses;
/// nothing is shared across instances and nothing survives a restart.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    windows: DashMap<String, Window>,
    quota: u32,
    window: Duration,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

impl FixedWindowLimiter {
    pub fn new(quota: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            quota,
            window,
        }
    }

    /// Count one request against `key`. Returns `false` once the quota for
    /// the current window is exhausted.
    pub fn try_acquire(&self, key: &str) -> bool {
        let now = Instant::now();

        let mut entry = self
            .windows
            .entry(key.to_string())
            .or_insert(Window {
                started_at: now,
                count: 0,
            });

        if now.duration_since(entry.started_at) >= self.window {
            entry.started_at = now;
            entry.count = 0;
        }

        if entry.count < self.quota {
            entry.count += 1;
            true
        } else {
            false
        }
    }
}
