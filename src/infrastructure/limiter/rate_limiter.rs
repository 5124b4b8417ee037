use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use dashmap::DashMap;
use parking_lot::Mutex;

/// Counter state for a single client key within the current window.
#[derive(Debug)]
struct FixedWindow {
    count: u32,
    reset_at: Instant,
}

impl FixedWindow {
    fn new(window: Duration) -> Self {
        Self {
            count: 0,
            reset_at: Instant::now() + window,
        }
    }

    /// Check-then-increment. Callers hold the per-key lock, so the pair is
    /// atomic even under concurrent requests for the same key.
    fn allow(&mut self, max_requests: u32, window: Duration) -> bool {
        let now = Instant::now();

        if now > self.reset_at {
            self.count = 1;
            self.reset_at = now + window;
            return true;
        }

        if self.count >= max_requests {
            return false;
        }

        self.count += 1;
        true
    }

    fn expired(&self, now: Instant) -> bool {
        now > self.reset_at
    }
}

/// In-memory fixed-window rate limiter, one counter per client key.
///
/// A window boundary admits up to twice the configured limit across two
/// adjacent windows. State is process-local: each instance of a scaled
/// deployment enforces the limit independently.
#[derive(Clone)]
pub struct RateLimiter {
    map: Arc<DashMap<String, Arc<Mutex<FixedWindow>>>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        RateLimiter {
            map: Arc::new(DashMap::new()),
            max_requests,
            window,
        }
    }

    fn get_window(&self, key: &str) -> Arc<Mutex<FixedWindow>> {
        if let Some(existing) = self.map.get(key) {
            existing.clone()
        } else {
            let fresh = Arc::new(Mutex::new(FixedWindow::new(self.window)));
            match self.map.entry(key.to_string()) {
                dashmap::mapref::entry::Entry::Occupied(entry) => entry.get().clone(),
                dashmap::mapref::entry::Entry::Vacant(entry) => {
                    entry.insert(fresh.clone());
                    fresh
                }
            }
        }
    }

    /// Returns whether the request for `key` is admitted, consuming one
    /// slot of the current window when it is.
    pub fn check(&self, key: &str) -> bool {
        let window = self.get_window(key);
        let mut w = window.lock();
        w.allow(self.max_requests, self.window)
    }

    /// Drops counters whose window has passed. Called periodically so a
    /// long-lived process does not accumulate one record per client key
    /// forever.
    pub fn sweep_expired(&self) -> usize {
        let before = self.map.len();
        let now = Instant::now();
        self.map.retain(|_, w| !w.lock().expired(now));
        before - self.map.len()
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.map.len()
    }
}
