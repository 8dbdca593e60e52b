//! Balance scoring between two candidate teams
//!
//! The weighted score encodes the priority order team size, then EHB and EHP
//! equally, then slayer level, through order-of-magnitude weight gaps. It is
//! not a lexicographic comparison: large EHB/EHP gaps can outweigh a size
//! difference, which is why the greedy search caps team sizes separately.

use shared::{Assessment, BalanceMetrics, Player};

use crate::types::team_totals;

/// Weights applied to each metric difference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub size: f64,
    pub ehb: f64,
    pub ehp: f64,
    pub slayer: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            size: 1000.0,
            ehb: 100.0,
            ehp: 100.0,
            slayer: 10.0,
        }
    }
}

/// Computes balance metrics and their weighted score
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceScorer {
    weights: ScoreWeights,
}

impl BalanceScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Absolute differences of team size and summed metrics
    pub fn score(&self, team_a: &[Player], team_b: &[Player]) -> BalanceMetrics {
        let a = team_totals(team_a);
        let b = team_totals(team_b);

        BalanceMetrics {
            size_diff: a.players.abs_diff(b.players),
            ehb_diff: (a.ehb - b.ehb).abs(),
            ehp_diff: (a.ehp - b.ehp).abs(),
            slayer_diff: a.slayer.abs_diff(b.slayer),
        }
    }

    /// Collapse metrics into a single scalar; lower is better
    pub fn weighted(&self, metrics: &BalanceMetrics) -> f64 {
        metrics.size_diff as f64 * self.weights.size
            + metrics.ehb_diff * self.weights.ehb
            + metrics.ehp_diff * self.weights.ehp
            + metrics.slayer_diff as f64 * self.weights.slayer
    }

    /// `weighted(score(a, b))`
    pub fn evaluate(&self, team_a: &[Player], team_b: &[Player]) -> f64 {
        self.weighted(&self.score(team_a, team_b))
    }
}

/// Qualitative tier for a final set of metrics
pub fn assess(metrics: &BalanceMetrics) -> Assessment {
    if metrics.size_diff > 1 {
        return Assessment::Poor;
    }
    if metrics.ehb_diff <= 300.0 && metrics.ehp_diff <= 300.0 {
        Assessment::Excellent
    } else if metrics.ehb_diff <= 500.0 && metrics.ehp_diff <= 500.0 {
        Assessment::Good
    } else {
        Assessment::Fair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{PlayerSeed, PlayerStats};

    fn player(id: &str, ehb: f64, ehp: f64, slayer: u32) -> Player {
        Player::new(PlayerSeed::new(id, id), PlayerStats::new(ehb, ehp, slayer))
    }

    #[test]
    fn test_score_sums_each_metric() {
        let scorer = BalanceScorer::new();
        let team_a = vec![player("a", 100.0, 20.0, 90), player("b", 10.0, 5.0, 60)];
        let team_b = vec![player("c", 50.0, 50.0, 99)];

        let metrics = scorer.score(&team_a, &team_b);
        assert_eq!(metrics.size_diff, 1);
        assert_eq!(metrics.ehb_diff, 60.0);
        assert_eq!(metrics.ehp_diff, 25.0);
        assert_eq!(metrics.slayer_diff, 51);
    }

    #[test]
    fn test_score_is_symmetric() {
        let scorer = BalanceScorer::new();
        let team_a = vec![player("a", 3.0, 4.0, 5)];
        let team_b = vec![player("b", 1.0, 9.0, 2), player("c", 0.0, 0.0, 1)];
        assert_eq!(scorer.score(&team_a, &team_b), scorer.score(&team_b, &team_a));
    }

    #[test]
    fn test_weighted_uses_fixed_weights() {
        let scorer = BalanceScorer::new();
        let metrics = BalanceMetrics {
            size_diff: 1,
            ehb_diff: 2.5,
            ehp_diff: 3.0,
            slayer_diff: 4,
        };
        // 1*1000 + 2.5*100 + 3*100 + 4*10
        assert_eq!(scorer.weighted(&metrics), 1590.0);
    }

    #[test]
    fn test_large_metric_gap_can_outweigh_size() {
        let scorer = BalanceScorer::new();
        let uneven_sizes = BalanceMetrics { size_diff: 2, ehb_diff: 0.0, ehp_diff: 0.0, slayer_diff: 0 };
        let uneven_stats = BalanceMetrics { size_diff: 0, ehb_diff: 15.0, ehp_diff: 10.0, slayer_diff: 0 };
        assert!(scorer.weighted(&uneven_stats) > scorer.weighted(&uneven_sizes));
    }

    #[test]
    fn test_custom_weights() {
        let scorer = BalanceScorer::with_weights(ScoreWeights {
            size: 0.0,
            ehb: 1.0,
            ehp: 0.0,
            slayer: 0.0,
        });
        let team_a = vec![player("a", 40.0, 999.0, 99)];
        let team_b = vec![player("b", 10.0, 0.0, 1), player("c", 5.0, 0.0, 1)];
        assert_eq!(scorer.evaluate(&team_a, &team_b), 25.0);
        assert_eq!(scorer.weights().ehb, 1.0);
    }

    #[test]
    fn test_empty_teams_score_zero() {
        let scorer = BalanceScorer::new();
        assert_eq!(scorer.evaluate(&[], &[]), 0.0);
    }

    #[test]
    fn test_assessment_tiers() {
        let tier = |size_diff, ehb_diff, ehp_diff| {
            assess(&BalanceMetrics { size_diff, ehb_diff, ehp_diff, slayer_diff: 0 })
        };
        assert_eq!(tier(0, 300.0, 300.0), Assessment::Excellent);
        assert_eq!(tier(1, 300.1, 10.0), Assessment::Good);
        assert_eq!(tier(1, 10.0, 500.0), Assessment::Good);
        assert_eq!(tier(0, 500.5, 0.0), Assessment::Fair);
        assert_eq!(tier(2, 0.0, 0.0), Assessment::Poor);
    }
}
