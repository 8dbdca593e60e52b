//! Rate-limited, cached, fault-tolerant player stats lookup
//!
//! A provider lives for exactly one balancing run. Each distinct handle costs
//! one limiter permit and one client call; repeats are served from the run
//! cache. Failures never escape: they become fallback stats plus a warning.

use std::collections::HashMap;

use shared::{handle_key, run_debug, run_warn, FetchResult, RunId};

use super::rate_limiter::RateLimiter;
use crate::traits::StatsClient;

pub struct StatsProvider<'a, C: StatsClient + ?Sized> {
    run_id: RunId,
    client: &'a C,
    limiter: &'a RateLimiter,
    cache: HashMap<String, FetchResult>,
}

impl<'a, C: StatsClient + ?Sized> StatsProvider<'a, C> {
    pub fn new(run_id: RunId, client: &'a C, limiter: &'a RateLimiter) -> Self {
        Self {
            run_id,
            client,
            limiter,
            cache: HashMap::new(),
        }
    }

    /// Stats for one handle; never fails
    pub async fn fetch(&mut self, handle: &str) -> FetchResult {
        let key = handle_key(handle);
        if let Some(hit) = self.cache.get(&key) {
            run_debug!(self.run_id, handle, "Stats served from run cache");
            return hit.cached();
        }

        self.limiter.acquire().await;

        let result = match self.client.fetch_profile(handle).await {
            Ok(stats) => {
                run_debug!(
                    self.run_id,
                    handle,
                    ehb = stats.ehb,
                    ehp = stats.ehp,
                    slayer = stats.slayer_level,
                    "Fetched live stats"
                );
                FetchResult::live(handle, stats)
            }
            Err(failure) if failure.is_not_found() => {
                run_warn!(self.run_id, handle, "No stats profile found, using default stats");
                FetchResult::fallback(handle, failure)
            }
            Err(failure) => {
                run_warn!(
                    self.run_id,
                    handle,
                    reason = %failure,
                    "Stats lookup failed, using default stats"
                );
                FetchResult::fallback(handle, failure)
            }
        };

        self.cache.insert(key, result.clone());
        result
    }

    /// Number of distinct handles looked up so far
    pub fn cached_handles(&self) -> usize {
        self.cache.len()
    }
}
