//! Shared error types for the team balancing system

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid UUID: {input}")]
    InvalidUuid { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Why a single player's stats lookup failed
///
/// Always recovered inside a run by substituting fallback stats.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsFetchFailure {
    #[error("player not found")]
    NotFound,

    #[error("stats service returned HTTP {0}")]
    HttpStatus(u16),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl StatsFetchFailure {
    /// True when the profile simply does not exist upstream
    pub fn is_not_found(&self) -> bool {
        matches!(self, StatsFetchFailure::NotFound)
    }
}
