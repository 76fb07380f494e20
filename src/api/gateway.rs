use async_trait::async_trait;

use crate::domain::{PerfType, PerformanceHistory, Player};

/// Source of player rankings and rating histories.
///
/// Implementations never fail: transport problems degrade to empty results.
#[async_trait]
pub trait RatingGateway: Send + Sync {
    async fn fetch_top_players(&self, perf: PerfType, count: u32) -> Vec<Player>;

    async fn fetch_rating_history(&self, username: &str) -> PerformanceHistory;
}
