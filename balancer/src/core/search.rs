//! Seeded greedy partition search
//!
//! Players are ordered by total score, then each seed configuration places a
//! different leading player on team A first and assigns everyone else greedily
//! to whichever team gives the lower weighted score. The best seed wins.

use shared::Player;

use super::scorer::BalanceScorer;
use crate::types::Partition;

/// Number of seed configurations tried by default
pub const DEFAULT_SEED_COUNT: usize = 3;

/// One greedy assignment and its score
#[derive(Debug, Clone)]
pub struct SeedCandidate {
    pub seed_index: usize,
    pub partition: Partition,
    pub weighted_score: f64,
}

/// Generates seeded greedy partitions and keeps the best one
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionSearch {
    scorer: BalanceScorer,
}

impl PartitionSearch {
    pub fn new(scorer: BalanceScorer) -> Self {
        Self { scorer }
    }

    /// Best partition across `min(seed_count, players.len())` seeds
    ///
    /// Ties favor the lowest seed index. Rosters with fewer than two players
    /// yield an empty partition.
    pub fn search(&self, players: &[Player], seed_count: usize) -> Partition {
        self.best_candidate(players, seed_count)
            .map(|candidate| candidate.partition)
            .unwrap_or_else(Partition::empty)
    }

    /// Best scoring candidate, if the roster can be split at all
    pub fn best_candidate(&self, players: &[Player], seed_count: usize) -> Option<SeedCandidate> {
        pick_best(self.candidates(players, seed_count))
    }

    /// Every seed configuration, in seed order
    pub fn candidates(&self, players: &[Player], seed_count: usize) -> Vec<SeedCandidate> {
        if players.len() < 2 {
            return Vec::new();
        }

        let ordered = order_by_total_score(players);
        let seeds = seed_count.max(1).min(ordered.len());

        (0..seeds)
            .map(|seed_index| {
                let partition = self.assign_from_seed(&ordered, seed_index);
                let weighted_score = self.scorer.evaluate(&partition.team_a, &partition.team_b);
                SeedCandidate {
                    seed_index,
                    partition,
                    weighted_score,
                }
            })
            .collect()
    }

    fn assign_from_seed(&self, ordered: &[Player], seed_index: usize) -> Partition {
        // Neither team may exceed the larger half of the roster.
        let capacity = ordered.len().div_ceil(2);
        let mut team_a = Vec::with_capacity(capacity);
        let mut team_b = Vec::with_capacity(capacity);

        team_a.push(ordered[seed_index].clone());

        for (idx, player) in ordered.iter().enumerate() {
            if idx == seed_index {
                continue;
            }

            let to_a = if team_a.len() >= capacity {
                false
            } else if team_b.len() >= capacity {
                true
            } else {
                team_a.push(player.clone());
                let score_with_a = self.scorer.evaluate(&team_a, &team_b);
                team_a.pop();

                team_b.push(player.clone());
                let score_with_b = self.scorer.evaluate(&team_a, &team_b);
                team_b.pop();

                score_with_a <= score_with_b
            };

            if to_a {
                team_a.push(player.clone());
            } else {
                team_b.push(player.clone());
            }
        }

        Partition::new(team_a, team_b)
    }
}

/// Lowest weighted score wins; ties keep the earlier candidate
pub fn pick_best(candidates: Vec<SeedCandidate>) -> Option<SeedCandidate> {
    candidates.into_iter().reduce(|best, candidate| {
        if candidate.weighted_score < best.weighted_score {
            candidate
        } else {
            best
        }
    })
}

/// Descending by total score; equal scores keep input order
pub fn order_by_total_score(players: &[Player]) -> Vec<Player> {
    let mut ordered = players.to_vec();
    ordered.sort_by(|a, b| b.total_score().total_cmp(&a.total_score()));
    ordered
}
