//! Trait definitions with mockall annotations for testing
//!
//! The stats service is the only external collaborator of the balancing core.
//! Hiding it behind a trait lets the pipeline be driven by canned responses in
//! tests while production wires in the reqwest client.

use shared::{PlayerStats, StatsFetchFailure};

/// Player statistics source abstraction
///
/// Implementations perform exactly one lookup per call. Rate limiting and
/// caching are layered on top by [`crate::core::StatsProvider`], so an
/// implementation must not sleep or retry on its own.
#[mockall::automock]
#[async_trait::async_trait]
pub trait StatsClient: Send + Sync {
    /// Fetch the skill metrics for one display handle
    ///
    /// # Returns
    /// Normalized stats, or the classified reason the lookup failed
    async fn fetch_profile(&self, handle: &str) -> Result<PlayerStats, StatsFetchFailure>;
}
