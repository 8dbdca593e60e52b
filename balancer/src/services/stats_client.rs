//! HTTP client for the Wise Old Man player profile endpoint

use serde_json::Value;
use url::Url;

use shared::{PlayerStats, StatsFetchFailure};

use crate::config::StatsApiConfig;
use crate::error::{BalancerError, BalancerResult};
use crate::traits::StatsClient;

/// Real stats client backed by reqwest
#[derive(Debug, Clone)]
pub struct RealStatsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RealStatsClient {
    pub fn new(config: &StatsApiConfig) -> BalancerResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| BalancerError::config(format!("Invalid stats API URL '{}': {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BalancerError::config(format!(
                "Stats API URL '{}' cannot take a player path",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| BalancerError::HttpClientError { message: e.to_string() })?;

        Ok(Self { http, base_url })
    }

    /// `{base_url}/{handle}` with the handle encoded as one path segment
    pub fn profile_url(&self, handle: &str) -> Result<Url, StatsFetchFailure> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StatsFetchFailure::Network(format!("{} cannot take a player path", self.base_url)))?
            .pop_if_empty()
            .push(handle);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl StatsClient for RealStatsClient {
    async fn fetch_profile(&self, handle: &str) -> Result<PlayerStats, StatsFetchFailure> {
        let url = self.profile_url(handle)?;

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return match response.status().as_u16() {
                404 => Err(StatsFetchFailure::NotFound),
                code => Err(StatsFetchFailure::HttpStatus(code)),
            };
        }

        let body = response.bytes().await.map_err(classify)?;
        let profile: Value = serde_json::from_slice(&body)
            .map_err(|e| StatsFetchFailure::MalformedBody(format!("Failed to parse profile: {}", e)))?;

        normalize_profile(&profile)
    }
}

fn classify(error: reqwest::Error) -> StatsFetchFailure {
    if error.is_timeout() {
        StatsFetchFailure::Timeout
    } else {
        StatsFetchFailure::Network(error.to_string())
    }
}

/// Extract balancing stats from a profile body
///
/// Two shapes are accepted for the slayer level: a flat `slayer.level` and the
/// snapshot form `latestSnapshot.data.skills.slayer.level`. The flat field wins
/// when both parse; neither parsing means level 1. Missing or negative EHB/EHP
/// read as zero.
pub fn normalize_profile(profile: &Value) -> Result<PlayerStats, StatsFetchFailure> {
    if !profile.is_object() {
        return Err(StatsFetchFailure::MalformedBody(
            "profile body is not a JSON object".to_string(),
        ));
    }

    let ehb = non_negative(profile.get("ehb"));
    let ehp = non_negative(profile.get("ehp"));
    let slayer_level = profile
        .pointer("/slayer/level")
        .and_then(as_level)
        .or_else(|| profile.pointer("/latestSnapshot/data/skills/slayer/level").and_then(as_level))
        .unwrap_or(1);

    Ok(PlayerStats::new(ehb, ehp, slayer_level))
}

fn non_negative(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(0.0).max(0.0)
}

fn as_level(value: &Value) -> Option<u32> {
    if let Some(level) = value.as_u64() {
        return Some(u32::try_from(level).unwrap_or(u32::MAX));
    }
    // Some snapshots report integral levels as floats
    value
        .as_f64()
        .filter(|level| level.is_finite() && *level >= 0.0)
        .map(|level| level.min(f64::from(u32::MAX)) as u32)
}
