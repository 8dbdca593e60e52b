//! Service-specific tests
//!
//! HTTP behaviour of the real stats client, exercised against a local
//! wiremock server.


#[cfg(test)]
pub mod common {
    use std::time::Duration;

    use crate::config::StatsApiConfig;
    use crate::services::RealStatsClient;

    pub const TEST_USER_AGENT: &str = "team-balancer-tests";

    /// Client pointed at `{server_uri}/players`
    pub fn client_for(server_uri: &str, request_timeout: Duration) -> RealStatsClient {
        let config = StatsApiConfig {
            base_url: format!("{}/players", server_uri),
            cooldown: Duration::ZERO,
            request_timeout,
            user_agent: TEST_USER_AGENT.to_string(),
        };
        RealStatsClient::new(&config).expect("Valid test client config")
    }
}
