//! Process-wide minimum spacing between stats service calls
//!
//! One limiter is shared (behind an `Arc`) by every balancing run so that
//! concurrent runs go through a single cadence. Waiters suspend on a fair
//! async mutex, which hands out permits in call order.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Default spacing between calls to the stats service
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5);

/// Stand-in deadline for cooldowns past the end of the clock
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

#[derive(Debug)]
pub struct RateLimiter {
    cooldown: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_call: Mutex::new(None),
        }
    }

    /// Limiter ready to be cloned into several balancers
    pub fn shared(cooldown: Duration) -> Arc<Self> {
        Arc::new(Self::new(cooldown))
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Wait until `cooldown` has passed since the previous permit, then take one
    ///
    /// Dropping the future while it waits leaves the recorded call time untouched.
    pub async fn acquire(&self) {
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let ready_at = previous
                .checked_add(self.cooldown)
                .unwrap_or_else(|| Instant::now() + FAR_FUTURE);
            if Instant::now() < ready_at {
                sleep_until(ready_at).await;
            }
        }
        *last_call = Some(Instant::now());
    }

    /// When the most recent permit was handed out
    pub async fn last_call(&self) -> Option<Instant> {
        *self.last_call.lock().await
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}
