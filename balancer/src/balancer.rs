//! Team balancer orchestrating one full run
//!
//! A run is a linear pipeline: fetch stats for every roster player in order,
//! search seeded greedy partitions, refine the best one with local swaps, then
//! assemble metrics and an assessment. Only the fetch phase suspends, and only
//! the fetch phase is subject to the run budget.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::time::timeout;

use shared::{handle_key, logging, run_debug, run_error, run_info, FetchResult, Player, PlayerSeed, RosterEntry, RunId};

use crate::{
    config::BalanceSettings,
    core::{assess, pick_best, BalanceScorer, LocalOptimizer, PartitionSearch, RateLimiter, StatsProvider},
    error::{BalancerError, BalancerResult},
    roster::resolve_seeds,
    traits::StatsClient,
    types::BalanceOutcome,
};

/// Splits a roster into two balanced teams
pub struct TeamBalancer<C>
where
    C: StatsClient + 'static,
{
    /// Injected stats source
    client: C,

    /// Process-wide cadence shared with every other balancer
    limiter: Arc<RateLimiter>,

    settings: BalanceSettings,
    scorer: BalanceScorer,
}

impl<C> TeamBalancer<C>
where
    C: StatsClient + 'static,
{
    pub fn new(client: C, limiter: Arc<RateLimiter>, settings: BalanceSettings) -> Self {
        Self {
            client,
            limiter,
            settings,
            scorer: BalanceScorer::default(),
        }
    }

    pub fn settings(&self) -> &BalanceSettings {
        &self.settings
    }

    pub fn scorer(&self) -> &BalanceScorer {
        &self.scorer
    }

    /// Resolve each entry's display handle, then balance
    pub async fn balance_entries(&self, roster: &[RosterEntry]) -> BalancerResult<BalanceOutcome> {
        self.balance(&resolve_seeds(roster)).await
    }

    /// Run the full pipeline over an already-resolved roster
    pub async fn balance(&self, roster: &[PlayerSeed]) -> BalancerResult<BalanceOutcome> {
        if roster.len() < 2 {
            return Err(BalancerError::InsufficientParticipants { count: roster.len() });
        }
        ensure_unique_ids(roster)?;

        let run_id = RunId::new();
        logging::log_startup(&run_id, &format!("balancing run for {} players", roster.len()));

        let fetches = match self.settings.run_budget {
            Some(budget) => match timeout(budget, self.fetch_all(run_id, roster)).await {
                Ok(fetches) => fetches,
                Err(_) => {
                    run_error!(run_id, budget_secs = budget.as_secs_f64(), "Run budget exceeded while fetching stats");
                    return Err(BalancerError::RunTimeout { budget });
                }
            },
            None => self.fetch_all(run_id, roster).await,
        };

        let players: Vec<Player> = roster
            .iter()
            .zip(&fetches)
            .map(|(seed, fetch)| Player::new(seed.clone(), fetch.stats))
            .collect();

        self.arrange(run_id, players, fetches)
    }

    /// Fetch every roster handle in order through one run-scoped provider
    async fn fetch_all(&self, run_id: RunId, roster: &[PlayerSeed]) -> Vec<FetchResult> {
        let mut provider = StatsProvider::new(run_id, &self.client, self.limiter.as_ref());
        let mut fetches = Vec::with_capacity(roster.len());
        for seed in roster {
            let fetch = provider.fetch(&seed.display_handle).await;
            run_debug!(run_id, handle = %fetch.handle, source = %fetch.source, "Stats resolved");
            fetches.push(fetch);
        }
        fetches
    }

    /// Search, refine, verify and score; pure from here on
    fn arrange(&self, run_id: RunId, players: Vec<Player>, fetches: Vec<FetchResult>) -> BalancerResult<BalanceOutcome> {
        let search = PartitionSearch::new(self.scorer);
        let candidates = search.candidates(&players, self.settings.seed_count);
        for candidate in &candidates {
            run_debug!(
                run_id,
                seed = candidate.seed_index,
                score = candidate.weighted_score,
                "Seed partition scored"
            );
        }
        let best = pick_best(candidates)
            .ok_or_else(|| BalancerError::invariant("no seed partition could be generated"))?;
        best.partition.verify_against(&players)?;

        let optimizer = LocalOptimizer::new(self.scorer, self.settings.max_iterations);
        let refinement = optimizer.refine(best.partition);
        run_debug!(
            run_id,
            seed = best.seed_index,
            initial = refinement.initial_score,
            final_score = refinement.final_score,
            swaps = refinement.swaps_applied,
            passes = refinement.passes,
            "Local refinement finished"
        );

        let partition = refinement.partition;
        partition.verify_against(&players)?;

        let metrics = self.scorer.score(&partition.team_a, &partition.team_b);
        let weighted_score = self.scorer.weighted(&metrics);
        let assessment = assess(&metrics);
        let not_found = failed_handles(&fetches);

        run_info!(
            run_id,
            assessment = assessment.label(),
            score = weighted_score,
            not_found = not_found.len(),
            "✅ Balancing run complete"
        );

        Ok(BalanceOutcome {
            run_id,
            partition,
            metrics,
            weighted_score,
            assessment,
            not_found,
            fetches,
        })
    }
}

fn ensure_unique_ids(roster: &[PlayerSeed]) -> BalancerResult<()> {
    let mut seen = HashSet::with_capacity(roster.len());
    for seed in roster {
        if !seen.insert(&seed.id) {
            return Err(BalancerError::invariant(format!(
                "participant {} appears more than once in the roster",
                seed.id
            )));
        }
    }
    Ok(())
}

/// Handles whose lookup failed, once each, in roster order
fn failed_handles(fetches: &[FetchResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    fetches
        .iter()
        .filter(|fetch| fetch.is_failure())
        .filter(|fetch| seen.insert(handle_key(&fetch.handle)))
        .map(|fetch| fetch.handle.clone())
        .collect()
}
