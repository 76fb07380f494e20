use std::sync::Arc;

use async_trait::async_trait;

use crate::api::gateway::RatingGateway;
use crate::cache::{self, Cache};
use crate::domain::{PerfType, PerformanceHistory, Player};

/// Memoizes another gateway's responses for a fixed time-to-live
pub struct CachedGateway<G> {
    inner: G,
    cache: Arc<dyn Cache>,
    ttl_secs: u64,
}

impl<G: RatingGateway> CachedGateway<G> {
    pub fn new(inner: G, cache: Arc<dyn Cache>, ttl_secs: u64) -> Self {
        Self {
            inner,
            cache,
            ttl_secs,
        }
    }

    fn players_key(perf: PerfType, count: u32) -> String {
        format!("players:{}:{}", perf.as_key(), count)
    }

    fn history_key(username: &str) -> String {
        format!("rating_history:{}", username)
    }
}

#[async_trait]
impl<G: RatingGateway> RatingGateway for CachedGateway<G> {
    async fn fetch_top_players(&self, perf: PerfType, count: u32) -> Vec<Player> {
        let key = Self::players_key(perf, count);
        if let Some(players) = cache::load_json(self.cache.as_ref(), &key).await {
            return players;
        }

        let players = self.inner.fetch_top_players(perf, count).await;
        cache::store_json(self.cache.as_ref(), &key, &players, self.ttl_secs).await;
        players
    }

    async fn fetch_rating_history(&self, username: &str) -> PerformanceHistory {
        let key = Self::history_key(username);
        if let Some(history) = cache::load_json(self.cache.as_ref(), &key).await {
            return history;
        }

        let history = self.inner.fetch_rating_history(username).await;
        cache::store_json(self.cache.as_ref(), &key, &history, self.ttl_secs).await;
        history
    }
}
