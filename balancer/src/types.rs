//! Balancer-specific data types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::{
    handle_key, Assessment, BalanceMetrics, BalanceReport, FetchResult, ParticipantId, Player, RunId, TeamReport,
    TeamSide, TeamTotals,
};

use crate::error::{BalancerError, BalancerResult};

/// A team; ordered only so output is stable
pub type Team = Vec<Player>;

/// Two disjoint teams covering the whole roster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub team_a: Team,
    pub team_b: Team,
}

impl Partition {
    pub fn new(team_a: Team, team_b: Team) -> Self {
        Self { team_a, team_b }
    }

    /// Degenerate partition returned for rosters too small to split
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.team_a.is_empty() && self.team_b.is_empty()
    }

    pub fn len(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::A => &mut self.team_a,
            TeamSide::B => &mut self.team_b,
        }
    }

    /// Locate a player by display handle, ignoring case
    pub fn find_by_handle(&self, handle: &str) -> Option<(TeamSide, usize)> {
        let key = handle_key(handle);
        [TeamSide::A, TeamSide::B].into_iter().find_map(|side| {
            self.team(side)
                .iter()
                .position(|p| handle_key(&p.display_handle) == key)
                .map(|idx| (side, idx))
        })
    }

    pub fn totals(&self, side: TeamSide) -> TeamTotals {
        team_totals(self.team(side))
    }

    /// Check that the teams are disjoint and together cover exactly `roster`
    pub fn verify_against(&self, roster: &[Player]) -> BalancerResult<()> {
        let expected: HashSet<&ParticipantId> = roster.iter().map(|p| &p.id).collect();
        let mut seen: HashSet<&ParticipantId> = HashSet::with_capacity(expected.len());

        for player in self.team_a.iter().chain(self.team_b.iter()) {
            if !expected.contains(&player.id) {
                return Err(BalancerError::invariant(format!(
                    "player {} is not part of the roster",
                    player.id
                )));
            }
            if !seen.insert(&player.id) {
                return Err(BalancerError::invariant(format!(
                    "player {} is assigned more than once",
                    player.id
                )));
            }
        }

        if seen.len() != expected.len() {
            return Err(BalancerError::invariant(format!(
                "{} of {} roster players are unassigned",
                expected.len() - seen.len(),
                expected.len()
            )));
        }
        Ok(())
    }
}

/// Sum a team's metrics
pub fn team_totals(team: &[Player]) -> TeamTotals {
    team.iter().fold(TeamTotals::default(), |mut totals, player| {
        totals.players += 1;
        totals.ehb += player.ehb();
        totals.ehp += player.ehp();
        totals.slayer += u64::from(player.slayer_level());
        totals
    })
}

/// Everything a balancing run produces
#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    pub run_id: RunId,
    pub partition: Partition,
    pub metrics: BalanceMetrics,
    pub weighted_score: f64,
    pub assessment: Assessment,
    /// Handles whose lookup failed, in roster order
    pub not_found: Vec<String>,
    /// One entry per roster player, in roster order
    pub fetches: Vec<FetchResult>,
}

impl BalanceOutcome {
    /// Build the serializable report consumed by presentation code
    pub fn report(&self) -> BalanceReport {
        BalanceReport {
            run_id: self.run_id,
            team_a: TeamReport {
                name: TeamSide::A.to_string(),
                players: self.partition.team_a.clone(),
                totals: self.partition.totals(TeamSide::A),
            },
            team_b: TeamReport {
                name: TeamSide::B.to_string(),
                players: self.partition.team_b.clone(),
                totals: self.partition.totals(TeamSide::B),
            },
            metrics: self.metrics,
            weighted_score: self.weighted_score,
            assessment: self.assessment,
            not_found: self.not_found.clone(),
        }
    }
}
