//! Main entry point for the balancer binary
//!
//! Loads a roster file, balances it against the live stats service and prints
//! the resulting teams.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use balancer::{
    config::budget_from_secs, core::assess, move_player, roster, services::RealStatsClient, swap_players,
    BalanceOutcome, BalancerConfig, RateLimiter, TeamBalancer,
};
use shared::{logging, RunId, TeamSide};

/// Split an event roster into two balanced teams
#[derive(Parser)]
#[command(name = "balancer")]
#[command(about = "Balances a roster into two teams using Wise Old Man player stats")]
pub struct Args {
    /// Path to a JSON array of roster entries
    #[arg(long)]
    pub roster: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Seconds between stats service calls (overrides STATS_COOLDOWN_SECS)
    #[arg(long)]
    pub cooldown_secs: Option<u64>,

    /// Wall-clock budget for fetching stats, 0 disables (overrides BALANCE_RUN_BUDGET_SECS)
    #[arg(long)]
    pub budget_secs: Option<u64>,

    /// Number of seed partitions to try (overrides BALANCE_SEED_COUNT)
    #[arg(long)]
    pub seeds: Option<usize>,

    /// Move a player to a team after balancing
    #[arg(long = "move", num_args = 2, value_names = ["HANDLE", "TEAM"])]
    pub move_to: Vec<String>,

    /// Swap two players on opposite teams after balancing
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"])]
    pub swap: Vec<String>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));

    let mut config = BalancerConfig::from_env().context("Failed to load configuration")?;
    if let Some(secs) = args.cooldown_secs {
        config.stats.cooldown = Duration::from_secs(secs);
    }
    if let Some(secs) = args.budget_secs {
        config.balance.run_budget = budget_from_secs(secs);
    }
    if let Some(seeds) = args.seeds {
        config.balance.seed_count = seeds;
    }
    config.validate()?;

    let entries = roster::load_roster(&args.roster)
        .with_context(|| format!("Failed to read roster from {}", args.roster.display()))?;

    let client = RealStatsClient::new(&config.stats)?;
    let limiter = RateLimiter::shared(config.stats.cooldown);
    let team_balancer = TeamBalancer::new(client, limiter, config.balance);

    let mut outcome = team_balancer.balance_entries(&entries).await?;
    logging::log_success(&outcome.run_id, &format!("Balanced {} players", entries.len()));

    apply_adjustments(&args, &team_balancer, &mut outcome)?;

    let report = outcome.report();
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Apply `--move` / `--swap` corrections and refresh the outcome's scores
fn apply_adjustments<C>(args: &Args, team_balancer: &TeamBalancer<C>, outcome: &mut BalanceOutcome) -> anyhow::Result<()>
where
    C: balancer::StatsClient + 'static,
{
    let scorer = team_balancer.scorer();
    let run_id = outcome.run_id;
    let mut adjusted = None;

    if let [handle, team] = args.move_to.as_slice() {
        let side: TeamSide = team.parse().map_err(anyhow::Error::msg)?;
        let metrics =
            move_player(&mut outcome.partition, handle, side, scorer).map_err(|e| adjustment_failed(run_id, e))?;
        adjusted = Some(metrics);
    }
    if let [first, second] = args.swap.as_slice() {
        let metrics =
            swap_players(&mut outcome.partition, first, second, scorer).map_err(|e| adjustment_failed(run_id, e))?;
        adjusted = Some(metrics);
    }

    if let Some(metrics) = adjusted {
        outcome.metrics = metrics;
        outcome.weighted_score = scorer.weighted(&metrics);
        outcome.assessment = assess(&metrics);
    }
    Ok(())
}

fn adjustment_failed(run_id: RunId, error: balancer::BalancerError) -> anyhow::Error {
    logging::log_error(&run_id, "Manual adjustment", &error);
    error.into()
}
