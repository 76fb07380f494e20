use std::sync::Arc;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use log::info;

use crate::api::{CachedGateway, LichessClient, RatingGateway};
use crate::cache;
use crate::config::settings::AppConfig;
use crate::domain::{PerfType, PerformanceHistory, Player, RatingTable};
use crate::rating::{RatingSeries, TableEntry, build_table, tabulate};

/// One player's day-by-day ratings
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeries {
    pub username: String,
    pub series: RatingSeries,
}

/// Fetches rankings and histories, then hands them to the tabulation engine
pub struct RatingsService {
    gateway: Arc<dyn RatingGateway>,
    max_concurrent: usize,
}

impl RatingsService {
    pub fn new(gateway: Arc<dyn RatingGateway>, max_concurrent: usize) -> Self {
        Self {
            gateway,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Lichess client behind the configured cache
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let cache = cache::connect(&config.cache).await;
        let client = LichessClient::new(&config.gateway)?;
        let gateway = CachedGateway::new(client, cache, config.cache.ttl_secs);

        Ok(Self::new(
            Arc::new(gateway),
            config.gateway.max_concurrent_requests,
        ))
    }

    pub async fn top_players(&self, perf: PerfType, count: u32) -> Vec<Player> {
        self.gateway.fetch_top_players(perf, count).await
    }

    /// Fetch histories concurrently; results line up with `players`
    pub async fn histories_for(&self, players: &[Player]) -> Vec<PerformanceHistory> {
        let usernames: Vec<String> = players.iter().map(|p| p.username.clone()).collect();
        stream::iter(usernames)
            .map(|username| {
                let gateway = Arc::clone(&self.gateway);
                async move { gateway.fetch_rating_history(&username).await }
            })
            .buffered(self.max_concurrent)
            .collect()
            .await
    }

    /// Ratings of a single user, without a current-rating fallback
    pub async fn player_ratings(&self, username: &str, perf: PerfType, days: u32) -> RatingSeries {
        let history = self.gateway.fetch_rating_history(username).await;
        tabulate(history.for_perf(perf), None, days)
    }

    /// Ratings of the top `count` players, falling back to their current rating
    pub async fn top_players_ratings(
        &self,
        perf: PerfType,
        count: u32,
        days: u32,
    ) -> Vec<PlayerSeries> {
        let players = self.top_players(perf, count).await;
        let histories = self.histories_for(&players).await;

        players
            .iter()
            .zip(histories)
            .map(|(player, history)| PlayerSeries {
                username: player.username.clone(),
                series: tabulate(history.for_perf(perf), player.current_rating(perf), days),
            })
            .collect()
    }

    /// Rectangular table of the top `count` players, ready for CSV export
    pub async fn ratings_table(&self, perf: PerfType, count: u32, days: u32) -> RatingTable {
        let players = self.top_players(perf, count).await;
        let histories = self.histories_for(&players).await;
        info!("Building {} table for {} players over {} days", perf, players.len(), days);

        let entries: Vec<TableEntry> = players
            .into_iter()
            .zip(histories)
            .map(|(player, history)| {
                let current = player.current(perf).cloned();
                TableEntry::new(player.username, history, current)
            })
            .collect();

        build_table(&entries, perf, days)
    }
}
