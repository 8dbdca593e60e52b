//! Bounded pairwise-swap refinement of a partition
//!
//! First-improvement hill climbing: each pass walks the cross-team pairs in a
//! fixed order and applies the first swap that strictly lowers the weighted
//! score, then starts the next pass from the beginning. A pass without an
//! improving swap ends the search early.

use tracing::debug;

use super::scorer::BalanceScorer;
use crate::types::Partition;

/// Outer pass limit used when none is configured
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Result of a refinement, with counters for logging
#[derive(Debug, Clone)]
pub struct Refinement {
    pub partition: Partition,
    pub initial_score: f64,
    pub final_score: f64,
    pub swaps_applied: usize,
    pub passes: usize,
}

/// Local search over single swaps between the two teams
#[derive(Debug, Clone, Copy)]
pub struct LocalOptimizer {
    scorer: BalanceScorer,
    max_iterations: usize,
}

impl LocalOptimizer {
    pub fn new(scorer: BalanceScorer, max_iterations: usize) -> Self {
        Self {
            scorer,
            max_iterations,
        }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Refined partition; its weighted score never exceeds the input's
    pub fn optimize(&self, partition: Partition) -> Partition {
        self.refine(partition).partition
    }

    pub fn refine(&self, mut partition: Partition) -> Refinement {
        let initial_score = self.scorer.evaluate(&partition.team_a, &partition.team_b);
        let mut current_score = initial_score;
        let mut swaps_applied = 0;
        let mut passes = 0;

        while passes < self.max_iterations {
            passes += 1;
            match self.first_improving_swap(&mut partition, current_score) {
                Some(score) => {
                    debug!(pass = passes, from = current_score, to = score, "Accepted improving swap");
                    current_score = score;
                    swaps_applied += 1;
                }
                None => break,
            }
        }

        Refinement {
            partition,
            initial_score,
            final_score: current_score,
            swaps_applied,
            passes,
        }
    }

    /// Apply the first swap that beats `current_score` and return the new score
    fn first_improving_swap(&self, partition: &mut Partition, current_score: f64) -> Option<f64> {
        for i in 0..partition.team_a.len() {
            for j in 0..partition.team_b.len() {
                std::mem::swap(&mut partition.team_a[i], &mut partition.team_b[j]);
                let score = self.scorer.evaluate(&partition.team_a, &partition.team_b);
                if score < current_score {
                    return Some(score);
                }
                std::mem::swap(&mut partition.team_a[i], &mut partition.team_b[j]);
            }
        }
        None
    }
}

impl Default for LocalOptimizer {
    fn default() -> Self {
        Self::new(BalanceScorer::default(), DEFAULT_MAX_ITERATIONS)
    }
}
