//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{SharedError, SharedResult, StatsFetchFailure};

/// Unique identifier for a single balancing run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> SharedResult<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| SharedError::InvalidUuid { input: s.to_string() })
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque participant identifier supplied by the caller
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ParticipantId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw roster entry as supplied by the community platform
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub participant_id: ParticipantId,
    #[serde(default)]
    pub nickname: Option<String>,
    pub username: String,
}

impl RosterEntry {
    pub fn new(participant_id: impl Into<ParticipantId>, nickname: Option<&str>, username: &str) -> Self {
        Self {
            participant_id: participant_id.into(),
            nickname: nickname.map(str::to_string),
            username: username.to_string(),
        }
    }

    /// Handle used against the stats service: nickname when set, otherwise username
    pub fn display_handle(&self) -> &str {
        match self.nickname.as_deref().map(str::trim) {
            Some(nick) if !nick.is_empty() => nick,
            _ => self.username.trim(),
        }
    }

    pub fn to_seed(&self) -> PlayerSeed {
        PlayerSeed::new(self.participant_id.clone(), self.display_handle())
    }
}

/// Case-folded form of a display handle
///
/// The stats service treats handles case-insensitively; every handle
/// comparison in a run goes through this key.
pub fn handle_key(handle: &str) -> String {
    handle.trim().to_lowercase()
}

/// Resolved roster entry accepted by the balancing core
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeed {
    pub id: ParticipantId,
    pub display_handle: String,
}

impl PlayerSeed {
    pub fn new(id: impl Into<ParticipantId>, display_handle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_handle: display_handle.into(),
        }
    }
}

/// Skill metrics for one player
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Efficient hours bossed
    pub ehb: f64,
    /// Efficient hours played
    pub ehp: f64,
    pub slayer_level: u32,
}

impl PlayerStats {
    pub fn new(ehb: f64, ehp: f64, slayer_level: u32) -> Self {
        Self {
            ehb,
            ehp,
            slayer_level: slayer_level.max(1),
        }
    }

    /// Stats substituted when a profile cannot be fetched
    pub fn fallback() -> Self {
        Self {
            ehb: 0.0,
            ehp: 0.0,
            slayer_level: 1,
        }
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::fallback()
    }
}

/// A roster participant enriched with stats; immutable for the rest of a run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: ParticipantId,
    pub display_handle: String,
    pub stats: PlayerStats,
}

impl Player {
    pub fn new(seed: PlayerSeed, stats: PlayerStats) -> Self {
        Self {
            id: seed.id,
            display_handle: seed.display_handle,
            stats,
        }
    }

    pub fn ehb(&self) -> f64 {
        self.stats.ehb
    }

    pub fn ehp(&self) -> f64 {
        self.stats.ehp
    }

    pub fn slayer_level(&self) -> u32 {
        self.stats.slayer_level
    }

    /// Ordering key for seed selection only
    pub fn total_score(&self) -> f64 {
        self.stats.ehb + self.stats.ehp + f64::from(self.stats.slayer_level)
    }
}

/// Where the stats in a [`FetchResult`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchSource {
    Live,
    Default,
    Cached,
}

impl fmt::Display for FetchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchSource::Live => write!(f, "live"),
            FetchSource::Default => write!(f, "default"),
            FetchSource::Cached => write!(f, "cached"),
        }
    }
}

/// Outcome of looking up one display handle during a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    pub handle: String,
    pub stats: PlayerStats,
    pub source: FetchSource,
    /// Set when the stats are the fallback because the lookup failed
    pub failure: Option<StatsFetchFailure>,
}

impl FetchResult {
    pub fn live(handle: &str, stats: PlayerStats) -> Self {
        Self {
            handle: handle.to_string(),
            stats,
            source: FetchSource::Live,
            failure: None,
        }
    }

    pub fn fallback(handle: &str, failure: StatsFetchFailure) -> Self {
        Self {
            handle: handle.to_string(),
            stats: PlayerStats::fallback(),
            source: FetchSource::Default,
            failure: Some(failure),
        }
    }

    /// Same result, marked as served from the run cache
    pub fn cached(&self) -> Self {
        Self {
            source: FetchSource::Cached,
            ..self.clone()
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// One of the two teams in a partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    A,
    B,
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::A => write!(f, "Team A"),
            TeamSide::B => write!(f, "Team B"),
        }
    }
}

impl std::str::FromStr for TeamSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "team a" | "team1" | "team 1" | "1" => Ok(TeamSide::A),
            "b" | "team b" | "team2" | "team 2" | "2" => Ok(TeamSide::B),
            _ => Err(format!("Unknown team: {s}")),
        }
    }
}

/// Summed metrics of a single team
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamTotals {
    pub players: usize,
    pub ehb: f64,
    pub ehp: f64,
    pub slayer: u64,
}

/// Absolute per-metric differences between two teams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceMetrics {
    pub size_diff: usize,
    pub ehb_diff: f64,
    pub ehp_diff: f64,
    pub slayer_diff: u64,
}

/// Qualitative balance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assessment {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Assessment {
    pub fn label(&self) -> &'static str {
        match self {
            Assessment::Excellent => "Excellent",
            Assessment::Good => "Good",
            Assessment::Fair => "Fair",
            Assessment::Poor => "Poor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Assessment::Excellent => "all criteria met",
            Assessment::Good => "close to targets",
            Assessment::Fair => "team sizes equal, stats could be better",
            Assessment::Poor => "needs improvement",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Balance - {}", self.label(), self.description())
    }
}
