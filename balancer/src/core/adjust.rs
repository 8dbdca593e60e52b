//! Manual corrections applied to a finished partition
//!
//! Handles are matched case-insensitively. Both operations leave the partition
//! untouched when they fail.

use shared::{BalanceMetrics, Player, TeamSide};

use super::scorer::BalanceScorer;
use crate::error::{BalancerError, BalancerResult};
use crate::types::Partition;

/// Move one player to `to`, appending them to the end of that team
///
/// This may leave the teams more than one player apart.
pub fn move_player(
    partition: &mut Partition,
    handle: &str,
    to: TeamSide,
    scorer: &BalanceScorer,
) -> BalancerResult<BalanceMetrics> {
    let (from, idx) = locate(partition, handle)?;
    if from == to {
        return Err(BalancerError::AlreadyOnTeam {
            handle: partition.team(from)[idx].display_handle.clone(),
            team: to,
        });
    }

    let roster = snapshot(partition);
    let player = partition.team_mut(from).remove(idx);
    partition.team_mut(to).push(player);

    partition.verify_against(&roster)?;
    Ok(scorer.score(&partition.team_a, &partition.team_b))
}

/// Exchange two players on opposite teams; each takes the other's slot
pub fn swap_players(
    partition: &mut Partition,
    first: &str,
    second: &str,
    scorer: &BalanceScorer,
) -> BalancerResult<BalanceMetrics> {
    let (first_side, first_idx) = locate(partition, first)?;
    let (second_side, second_idx) = locate(partition, second)?;
    if first_side == second_side {
        return Err(BalancerError::SameTeam {
            first: partition.team(first_side)[first_idx].display_handle.clone(),
            second: partition.team(second_side)[second_idx].display_handle.clone(),
        });
    }

    let roster = snapshot(partition);
    let (a_idx, b_idx) = match first_side {
        TeamSide::A => (first_idx, second_idx),
        TeamSide::B => (second_idx, first_idx),
    };
    std::mem::swap(&mut partition.team_a[a_idx], &mut partition.team_b[b_idx]);

    partition.verify_against(&roster)?;
    Ok(scorer.score(&partition.team_a, &partition.team_b))
}

fn locate(partition: &Partition, handle: &str) -> BalancerResult<(TeamSide, usize)> {
    partition
        .find_by_handle(handle.trim())
        .ok_or_else(|| BalancerError::PlayerNotFound {
            handle: handle.to_string(),
        })
}

fn snapshot(partition: &Partition) -> Vec<Player> {
    partition.team_a.iter().chain(partition.team_b.iter()).cloned().collect()
}
