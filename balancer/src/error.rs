//! Balancer error types

use shared::{SharedError, TeamSide};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalancerError {
    #[error("Not enough participants to form teams: {count} (need at least 2)")]
    InsufficientParticipants { count: usize },

    #[error("Balancing run exceeded its {budget:?} budget")]
    RunTimeout { budget: Duration },

    #[error("Partition invariant violated: {reason}")]
    InvariantViolation { reason: String },

    #[error("Player '{handle}' not found in any team")]
    PlayerNotFound { handle: String },

    #[error("Player '{handle}' is already on {team}")]
    AlreadyOnTeam { handle: String, team: TeamSide },

    #[error("Players '{first}' and '{second}' are already on the same team")]
    SameTeam { first: String, second: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("HTTP client error: {message}")]
    HttpClientError { message: String },

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl BalancerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }
}

pub type BalancerResult<T> = Result<T, BalancerError>;
