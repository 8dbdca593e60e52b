//! Runtime configuration for the stats client and balancing runs
//!
//! Values come from the environment (optionally seeded from a `.env` file)
//! and fall back to the defaults below. CLI flags override them afterwards.

use std::str::FromStr;
use std::time::Duration;

use shared::SharedError;
use url::Url;

use crate::core::{DEFAULT_COOLDOWN, DEFAULT_MAX_ITERATIONS, DEFAULT_SEED_COUNT};
use crate::error::{BalancerError, BalancerResult};

pub const DEFAULT_STATS_API_URL: &str = "https://api.wiseoldman.net/v2/players";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_RUN_BUDGET: Duration = Duration::from_secs(300);

/// Longest accepted spacing between stats calls
pub const MAX_COOLDOWN: Duration = Duration::from_secs(3600);
/// Longest accepted fetch-phase budget
pub const MAX_RUN_BUDGET: Duration = Duration::from_secs(24 * 3600);

/// Connection settings for the player stats service
#[derive(Debug, Clone, PartialEq)]
pub struct StatsApiConfig {
    pub base_url: String,
    /// Minimum spacing between any two calls in this process
    pub cooldown: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for StatsApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STATS_API_URL.to_string(),
            cooldown: DEFAULT_COOLDOWN,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("team-balancer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Knobs for a single balancing run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceSettings {
    pub seed_count: usize,
    pub max_iterations: usize,
    /// Wall-clock limit on the fetch phase; `None` waits indefinitely
    pub run_budget: Option<Duration>,
}

impl Default for BalanceSettings {
    fn default() -> Self {
        Self {
            seed_count: DEFAULT_SEED_COUNT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            run_budget: Some(DEFAULT_RUN_BUDGET),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalancerConfig {
    pub stats: StatsApiConfig,
    pub balance: BalanceSettings,
}

impl BalancerConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> BalancerResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> BalancerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("STATS_API_URL") {
            config.stats.base_url = url.trim().to_string();
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "STATS_COOLDOWN_SECS")? {
            config.stats.cooldown = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "STATS_TIMEOUT_SECS")? {
            config.stats.request_timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = lookup("STATS_USER_AGENT") {
            config.stats.user_agent = agent;
        }
        if let Some(seeds) = parse_var(&lookup, "BALANCE_SEED_COUNT")? {
            config.balance.seed_count = seeds;
        }
        if let Some(iterations) = parse_var(&lookup, "BALANCE_MAX_ITERATIONS")? {
            config.balance.max_iterations = iterations;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "BALANCE_RUN_BUDGET_SECS")? {
            config.balance.run_budget = budget_from_secs(secs);
        }

        Ok(config)
    }

    pub fn validate(&self) -> BalancerResult<()> {
        let url = Url::parse(&self.stats.base_url)
            .map_err(|e| BalancerError::config(format!("Invalid stats API URL '{}': {}", self.stats.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(BalancerError::config(format!(
                "Stats API URL '{}' cannot take a player path",
                self.stats.base_url
            )));
        }
        if self.stats.request_timeout.is_zero() {
            return Err(BalancerError::config("Request timeout must be greater than zero"));
        }
        if self.balance.seed_count == 0 {
            return Err(BalancerError::config("Seed count must be at least 1"));
        }
        if self.stats.cooldown > MAX_COOLDOWN {
            return Err(BalancerError::config(format!(
                "Cooldown of {}s exceeds the {}s limit",
                self.stats.cooldown.as_secs(),
                MAX_COOLDOWN.as_secs()
            )));
        }
        if let Some(budget) = self.balance.run_budget.filter(|budget| *budget > MAX_RUN_BUDGET) {
            return Err(BalancerError::config(format!(
                "Run budget of {}s exceeds the {}s limit",
                budget.as_secs(),
                MAX_RUN_BUDGET.as_secs()
            )));
        }
        Ok(())
    }
}

/// Zero seconds means no budget
pub fn budget_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn parse_var<T, F>(lookup: &F, key: &str) -> BalancerResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            BalancerError::from(SharedError::InvalidConfig {
                field: key.to_string(),
                value: raw.clone(),
            })
        }),
    }
}
