//! Token bucket throttle shared by all requests of one provider.

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

/// Default rate: two requests per second.
const DEFAULT_REQUESTS_PER_MINUTE: u32 = 120;

/// Default bucket capacity (allows a short burst).
const DEFAULT_BURST_CAPACITY: f64 = 2.0;

/// Token bucket state.
#[derive(Debug)]
struct TokenBucket {
    /// Current number of available tokens.
    tokens: f64,
    /// Last time the bucket was updated.
    last_update: Instant,
    /// Token refill rate (tokens per second).
    rate: f64,
    /// Maximum bucket capacity.
    capacity: f64,
}

impl TokenBucket {
    fn from_policy(policy: &ThrottlePolicy) -> Self {
        let capacity = policy.burst_capacity.max(1.0);
        Self {
            tokens: capacity,
            last_update: Instant::now(),
            rate: f64::from(policy.requests_per_minute.max(1)) / 60.0,
            capacity,
        }
    }

    /// Refill tokens based on elapsed time.
    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();

        self.tokens = (self.tokens + elapsed * self.rate).min(self.capacity);
        self.last_update = now;
    }

    fn try_acquire(&mut self) -> bool {
        self.refill();

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Wait time until a token becomes available.
    fn time_until_available(&mut self) -> Duration {
        self.refill();

        if self.tokens >= 1.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64((1.0 - self.tokens) / self.rate)
        }
    }
}

/// Maximum request rate for one provider.
#[derive(Clone, Debug, PartialEq)]
pub struct ThrottlePolicy {
    /// Maximum sustained requests per minute.
    pub requests_per_minute: u32,
    /// Requests that may be issued back to back before throttling kicks in.
    pub burst_capacity: f64,
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            requests_per_minute: DEFAULT_REQUESTS_PER_MINUTE,
            burst_capacity: DEFAULT_BURST_CAPACITY,
        }
    }
}

/// Thread-safe token bucket throttle.
///
/// One instance holds one request budget; share it behind an `Arc`.
pub struct Throttle {
    policy: ThrottlePolicy,
    bucket: Mutex<TokenBucket>,
}

impl Throttle {
    pub fn new(policy: ThrottlePolicy) -> Self {
        let bucket = TokenBucket::from_policy(&policy);
        Self {
            policy,
            bucket: Mutex::new(bucket),
        }
    }

    pub fn policy(&self) -> &ThrottlePolicy {
        &self.policy
    }

    /// Lock the bucket, recovering from poison.
    fn lock_bucket(&self) -> MutexGuard<'_, TokenBucket> {
        self.bucket.lock().unwrap_or_else(|poisoned| {
            warn!("Throttle mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Acquire a token, waiting asynchronously until one is available.
    pub async fn acquire(&self) {
        loop {
            let wait_time = {
                let mut bucket = self.lock_bucket();
                if bucket.try_acquire() {
                    return;
                }
                bucket.time_until_available()
            };

            if wait_time > Duration::ZERO {
                debug!("Throttle: waiting {:?} for next request slot", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }
    }

    /// Try to acquire a token without waiting.
    pub fn try_acquire(&self) -> bool {
        self.lock_bucket().try_acquire()
    }

    pub fn remaining_tokens(&self) -> f64 {
        let mut bucket = self.lock_bucket();
        bucket.refill();
        bucket.tokens
    }

    /// Refill the bucket to full capacity.
    pub fn reset(&self) {
        *self.lock_bucket() = TokenBucket::from_policy(&self.policy);
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(ThrottlePolicy::default())
    }
}
