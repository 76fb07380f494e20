use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use urlencoding::encode;

use crate::api::gateway::RatingGateway;
use crate::api::parsers;
use crate::config::settings::GatewaySettings;
use crate::domain::{PerfType, PerformanceHistory, Player};
use crate::errors::fetch_context;
use crate::http::RateLimitedClient;

/// Lichess API client
pub struct LichessClient {
    client: RateLimitedClient,
    base_url: String,
}

impl LichessClient {
    /// Create a new Lichess API client
    pub fn new(settings: &GatewaySettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
            settings.max_concurrent_requests,
        )?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the leaderboard for a category
    pub async fn try_fetch_top_players(&self, perf: PerfType, count: u32) -> Result<Vec<Player>> {
        let url = self.build_top_players_url(perf, count);
        let body = self.fetch_text(&url).await?;
        let players = parsers::parse_top_players(&body)?;

        info!("Fetched {} top {} players", players.len(), perf);
        Ok(players)
    }

    /// Fetch every category's rating history for a user
    pub async fn try_fetch_rating_history(&self, username: &str) -> Result<PerformanceHistory> {
        let url = self.build_rating_history_url(username);
        let body = self.fetch_text(&url).await?;
        parsers::parse_rating_history(&body)
    }

    // --- Helper Methods ---

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .await
            .with_context(|| fetch_context(url))?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status {} for {}", response.status(), url);
        }

        response.text().await.with_context(|| fetch_context(url))
    }

    fn build_top_players_url(&self, perf: PerfType, count: u32) -> String {
        format!("{}/player/top/{}/{}", self.base_url, count, perf.as_key())
    }

    fn build_rating_history_url(&self, username: &str) -> String {
        format!("{}/user/{}/rating-history", self.base_url, encode(username))
    }
}

#[async_trait]
impl RatingGateway for LichessClient {
    async fn fetch_top_players(&self, perf: PerfType, count: u32) -> Vec<Player> {
        self.try_fetch_top_players(perf, count)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to fetch top {} {} players: {:?}", count, perf, e);
                Vec::new()
            })
    }

    async fn fetch_rating_history(&self, username: &str) -> PerformanceHistory {
        self.try_fetch_rating_history(username)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to fetch rating history for {}: {:?}", username, e);
                PerformanceHistory::new()
            })
    }
}
