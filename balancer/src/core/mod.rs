//! Core balancing logic
//!
//! Everything here except the rate limiter and the stats provider is pure,
//! synchronous computation over in-memory players.

pub mod adjust;
pub mod optimizer;
pub mod rate_limiter;
pub mod scorer;
pub mod search;
pub mod stats_provider;

pub use adjust::{move_player, swap_players};
pub use optimizer::{LocalOptimizer, Refinement, DEFAULT_MAX_ITERATIONS};
pub use rate_limiter::{RateLimiter, DEFAULT_COOLDOWN};
pub use scorer::{assess, BalanceScorer, ScoreWeights};
pub use search::{order_by_total_score, pick_best, PartitionSearch, SeedCandidate, DEFAULT_SEED_COUNT};
pub use stats_provider::StatsProvider;
