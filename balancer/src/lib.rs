//! Team balancing library
//!
//! Splits an event roster into two teams whose skill metrics are as even as
//! possible. Player stats come from an external, rate-limited stats service
//! through the [`StatsClient`] trait; everything after the fetch phase is pure
//! computation.

pub mod balancer;
pub mod config;
pub mod core;
pub mod error;
pub mod roster;
pub mod services;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use balancer::TeamBalancer;
pub use config::{BalanceSettings, BalancerConfig, StatsApiConfig};
pub use core::{move_player, swap_players, BalanceScorer, LocalOptimizer, PartitionSearch, RateLimiter, StatsProvider};
pub use error::{BalancerError, BalancerResult};
pub use traits::StatsClient;
pub use types::{team_totals, BalanceOutcome, Partition, Team};
