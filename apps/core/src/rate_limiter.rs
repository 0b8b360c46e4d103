use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

/// Sliding-window limiter for dashboard analyze requests.
///
/// Tracks request timestamps per client address. Only the timestamps inside
/// the current window are kept.
pub struct RateLimiter {
    /// Timestamps of accepted requests, per client address.
    requests: HashMap<IpAddr, Vec<Instant>>,
    /// Maximum number of requests allowed within `window`.
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    /// Creates a new `RateLimiter`.
    ///
    /// # Arguments
    ///
    /// * `limit` - The number of requests allowed per `window`.
    /// * `window` - The time duration of the sliding window.
    pub fn new(limit: usize, window: Duration) -> Self {
        RateLimiter {
            requests: HashMap::new(),
            limit,
            window,
        }
    }

    /// Records a request from `client` if it fits in the window.
    ///
    /// Returns `false` when the client already used its quota.
    pub fn check(&mut self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now())
    }

    fn check_at(&mut self, client: IpAddr, now: Instant) -> bool {
        let window = self.window;
        let client_requests = self.requests.entry(client).or_default();

        client_requests.retain(|&timestamp| now.duration_since(timestamp) < window);

        if client_requests.len() < self.limit {
            client_requests.push(now);
            true
        } else {
            false
        }
    }

    /// Drops clients with no request inside the current window.
    pub fn prune(&mut self) {
        let now = Instant::now();
        let window = self.window;
        self.requests.retain(|_, stamps| {
            stamps.retain(|&timestamp| now.duration_since(timestamp) < window);
            !stamps.is_empty()
        });
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.requests.len()
    }
}
