//! Politeness delay between outbound requests
//!
//! Every request waits a fixed base delay plus a bounded random jitter.
//! Requests are issued strictly sequentially, so the limiter carries no
//! synchronization. There is no escalation on rate-limit responses.

use std::time::Duration;

use tokio::time::sleep;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct RateLimiter {
    base: Duration,
    jitter: Duration,
}

impl RateLimiter {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// Block the current sequence of operations before the next request.
    /// Zero base and zero jitter degrade to no delay at all.
    pub async fn wait(&self) {
        let delay = self.next_delay();
        if delay.is_zero() {
            return;
        }
        trace!("rate limiter sleeping for {delay:?}");
        sleep(delay).await;
    }

    fn next_delay(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        let extra = if jitter_ms == 0 {
            0
        } else {
            fastrand::u64(0..=jitter_ms)
        };
        self.base + Duration::from_millis(extra)
    }
}
