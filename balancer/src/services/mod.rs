//! Service implementations
//!
//! Real implementations of the traits in [`crate::traits`]. These perform the
//! actual network I/O.

pub mod stats_client;

#[cfg(test)]
mod tests;

pub use stats_client::{normalize_profile, RealStatsClient};
