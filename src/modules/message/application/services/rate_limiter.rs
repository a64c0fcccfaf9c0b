use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Fixed-window per-IP limiter for the public contact endpoint. State is
/// in-memory only; a restart forgets it, which is acceptable for a single
/// admin inbox.
pub struct FixedWindowRateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<IpAddr, (Instant, u32)>>,
}

impl FixedWindowRateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Default for the contact form: 5 submissions per 15 minutes per IP.
    pub fn contact_default() -> Self {
        Self::new(5, Duration::from_secs(15 * 60))
    }

    /// Returns true if the request is allowed and records it.
    pub fn allow(&self, client: IpAddr) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().expect("rate limiter lock poisoned");

        // Drop stale windows opportunistically so the map stays bounded.
        windows.retain(|_, (start, _)| now.duration_since(*start) < self.window);

        let (start, count) = windows.entry(client).or_insert((now, 0));

        if now.duration_since(*start) >= self.window {
            *start = now;
            *count = 0;
        }

        if *count >= self.max_requests {
            return false;
        }

        *count += 1;
        true
    }
}
