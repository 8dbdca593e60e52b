//! Shared types for the team balancing system
//!
//! Contains the data model exchanged between the balancing core and its
//! callers (roster entries, player stats, balance metrics, reports) plus the
//! logging setup used by every binary.

pub mod errors;
pub mod logging;
pub mod report;
pub mod types;

pub use errors::*;
pub use report::{BalanceReport, TeamReport};
pub use types::*;
