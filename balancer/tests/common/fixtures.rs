//! Test fixtures and data for balancer tests
//!
//! Rosters for the documented scenarios plus a stats client that answers from
//! a fixed table and records when it was called.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::time::Instant;

use balancer::StatsClient;
use shared::{PlayerSeed, PlayerStats, StatsFetchFailure};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Standard cooldown used by paused-clock tests
    pub const COOLDOWN_SECS: u64 = 5;

    /// Handle that the canned client reports as missing
    pub const MISSING_HANDLE: &'static str = "ghost";

    /// Roster with one player per (handle, ehb) pair; ehp 0, slayer 1
    pub fn ehb_roster(players: &[(&str, f64)]) -> (Vec<PlayerSeed>, CannedStatsClient) {
        let seeds = players
            .iter()
            .enumerate()
            .map(|(idx, (handle, _))| PlayerSeed::new(format!("id-{idx}"), *handle))
            .collect();
        let client = CannedStatsClient::new(
            players
                .iter()
                .map(|(handle, ehb)| (handle.to_string(), PlayerStats::new(*ehb, 0.0, 1))),
        );
        (seeds, client)
    }

    /// Four players with ehb 100, 80, 50, 10
    pub fn scenario_a() -> (Vec<PlayerSeed>, CannedStatsClient) {
        Self::ehb_roster(&[("p50", 50.0), ("p100", 100.0), ("p10", 10.0), ("p80", 80.0)])
    }

    /// Five players of mixed strength
    pub fn scenario_b() -> (Vec<PlayerSeed>, CannedStatsClient) {
        let seeds = Self::seeds(&["alpha", "bravo", "charlie", "delta", "echo"]);
        let client = CannedStatsClient::new([
            ("alpha".to_string(), PlayerStats::new(420.0, 1300.0, 99)),
            ("bravo".to_string(), PlayerStats::new(310.0, 900.0, 95)),
            ("charlie".to_string(), PlayerStats::new(150.0, 1100.0, 90)),
            ("delta".to_string(), PlayerStats::new(90.0, 400.0, 82)),
            ("echo".to_string(), PlayerStats::new(12.0, 150.0, 70)),
        ]);
        (seeds, client)
    }

    /// Two players, the second of whom has no profile
    pub fn scenario_c() -> (Vec<PlayerSeed>, CannedStatsClient) {
        let seeds = Self::seeds(&["alpha", Self::MISSING_HANDLE]);
        let client = CannedStatsClient::new([("alpha".to_string(), PlayerStats::new(75.0, 500.0, 88))]);
        (seeds, client)
    }

    /// Twelve players with spread-out but deterministic stats
    pub fn scenario_d() -> (Vec<PlayerSeed>, CannedStatsClient) {
        let handles: Vec<String> = (0..12).map(|i| format!("player{i:02}")).collect();
        let seeds = handles
            .iter()
            .enumerate()
            .map(|(idx, handle)| PlayerSeed::new(idx as u64, handle.as_str()))
            .collect();
        let client = CannedStatsClient::new(handles.iter().enumerate().map(|(idx, handle)| {
            let i = idx as f64;
            let stats = PlayerStats::new((i * 37.0) % 211.0, (i * 113.0) % 947.0, 60 + (idx as u32 * 7) % 40);
            (handle.clone(), stats)
        }));
        (seeds, client)
    }

    pub fn seeds(handles: &[&str]) -> Vec<PlayerSeed> {
        handles
            .iter()
            .enumerate()
            .map(|(idx, handle)| PlayerSeed::new(idx as u64, *handle))
            .collect()
    }
}

/// Stats client answering from a fixed table; unknown handles are not found
#[derive(Clone, Default)]
pub struct CannedStatsClient {
    stats: Arc<HashMap<String, PlayerStats>>,
    failures: Arc<HashMap<String, StatsFetchFailure>>,
    calls: Arc<AtomicUsize>,
    call_times: Arc<Mutex<Vec<Instant>>>,
}

impl CannedStatsClient {
    pub fn new(stats: impl IntoIterator<Item = (String, PlayerStats)>) -> Self {
        Self {
            stats: Arc::new(stats.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Fail lookups of `handle` with a specific reason
    pub fn with_failure(mut self, handle: &str, failure: StatsFetchFailure) -> Self {
        let mut failures = (*self.failures).clone();
        failures.insert(handle.to_string(), failure);
        self.failures = Arc::new(failures);
        self
    }

    /// Record calls into an existing timeline, shared with other clients
    pub fn with_timeline(mut self, call_times: Arc<Mutex<Vec<Instant>>>) -> Self {
        self.call_times = call_times;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.call_times.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl StatsClient for CannedStatsClient {
    async fn fetch_profile(&self, handle: &str) -> Result<PlayerStats, StatsFetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.call_times.lock().unwrap().push(Instant::now());

        if let Some(failure) = self.failures.get(handle) {
            return Err(failure.clone());
        }
        self.stats.get(handle).copied().ok_or(StatsFetchFailure::NotFound)
    }
}
