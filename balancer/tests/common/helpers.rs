//! Test helpers and builder patterns for balancer tests
//!
//! Reduce the boilerplate of wiring a balancer around a canned client and of
//! checking partition properties.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use balancer::config::BalanceSettings;
use balancer::{Partition, RateLimiter, StatsClient, TeamBalancer};
use shared::{ParticipantId, Player, PlayerSeed};

use super::fixtures::TestFixtures;

/// Builder for balancers with test-friendly defaults
///
/// Defaults to the standard cooldown and no run budget.
pub struct BalancerBuilder {
    limiter: Option<Arc<RateLimiter>>,
    cooldown: Duration,
    settings: BalanceSettings,
}

impl BalancerBuilder {
    pub fn new() -> Self {
        Self {
            limiter: None,
            cooldown: Duration::from_secs(TestFixtures::COOLDOWN_SECS),
            settings: BalanceSettings {
                run_budget: None,
                ..BalanceSettings::default()
            },
        }
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Share an existing limiter instead of creating one
    pub fn with_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = Some(limiter);
        self
    }

    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.settings.run_budget = Some(budget);
        self
    }

    pub fn with_seed_count(mut self, seed_count: usize) -> Self {
        self.settings.seed_count = seed_count;
        self
    }

    pub fn build<C: StatsClient + 'static>(self, client: C) -> TeamBalancer<C> {
        let limiter = self.limiter.unwrap_or_else(|| RateLimiter::shared(self.cooldown));
        TeamBalancer::new(client, limiter, self.settings)
    }
}

impl Default for BalancerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Common assertions and helper methods
pub struct TestHelpers;

impl TestHelpers {
    /// Display handles of a team, in team order
    pub fn handles(team: &[Player]) -> Vec<&str> {
        team.iter().map(|p| p.display_handle.as_str()).collect()
    }

    /// Assert both teams are disjoint and together cover the roster exactly
    pub fn assert_covers_roster(partition: &Partition, roster: &[PlayerSeed]) {
        let expected: HashSet<&ParticipantId> = roster.iter().map(|s| &s.id).collect();
        let mut seen = HashSet::new();
        for player in partition.team_a.iter().chain(partition.team_b.iter()) {
            assert!(expected.contains(&player.id), "unexpected player {}", player.id);
            assert!(seen.insert(&player.id), "player {} assigned twice", player.id);
        }
        assert_eq!(seen.len(), expected.len(), "some roster players are unassigned");
    }

    pub fn assert_size_bound(partition: &Partition) {
        let diff = partition.team_a.len().abs_diff(partition.team_b.len());
        assert!(diff <= 1, "team sizes differ by {diff}");
    }
}
