//! Serializable balancing report handed to presentation code

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Assessment, BalanceMetrics, Player, RunId, TeamTotals};

/// One team as presented to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub name: String,
    pub players: Vec<Player>,
    pub totals: TeamTotals,
}

/// Final result of a balancing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub run_id: RunId,
    pub team_a: TeamReport,
    pub team_b: TeamReport,
    pub metrics: BalanceMetrics,
    pub weighted_score: f64,
    pub assessment: Assessment,
    /// Handles whose profile lookup failed and fell back to default stats
    pub not_found: Vec<String>,
}

impl BalanceReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TeamReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} players)", self.name, self.players.len())?;
        for player in &self.players {
            writeln!(
                f,
                "  - {} (EHB: {:.1}, EHP: {:.1}, Slayer: {})",
                player.display_handle,
                player.ehb(),
                player.ehp(),
                player.slayer_level()
            )?;
        }
        write!(
            f,
            "  Totals: EHB {:.1}, EHP {:.1}, Slayer {}",
            self.totals.ehb, self.totals.ehp, self.totals.slayer
        )
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.team_a)?;
        writeln!(f, "{}", self.team_b)?;
        writeln!(f, "Team size difference: {}", self.metrics.size_diff)?;
        writeln!(f, "EHB diff: {:.1}", self.metrics.ehb_diff)?;
        writeln!(f, "EHP diff: {:.1}", self.metrics.ehp_diff)?;
        writeln!(f, "Slayer diff: {}", self.metrics.slayer_diff)?;
        write!(f, "Assessment: {}", self.assessment)?;
        if !self.not_found.is_empty() {
            write!(f, "\nNo stats profile found for: {}", self.not_found.join(", "))?;
        }
        Ok(())
    }
}
