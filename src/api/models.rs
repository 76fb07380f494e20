use serde::Serialize;
use serde_json::{Map, Value};

use crate::rating::{DatedRating, short_labeled};
use crate::services::ratings::PlayerSeries;

/// `{"username": ..., "ratings": {"Jan 08": 1500, ...}}`, dates oldest first
#[derive(Debug, Serialize)]
pub struct RatingsResponse {
    pub username: String,
    pub ratings: Map<String, Value>,
}

impl RatingsResponse {
    pub fn new(username: impl Into<String>, series: &[DatedRating]) -> Self {
        let ratings = short_labeled(series)
            .into_iter()
            .map(|(label, rating)| (label, Value::from(rating)))
            .collect();

        Self {
            username: username.into(),
            ratings,
        }
    }
}

impl From<PlayerSeries> for RatingsResponse {
    fn from(player: PlayerSeries) -> Self {
        Self::new(player.username, &player.series)
    }
}

/// A single object when one player was requested, a list otherwise
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TopRatingsResponse {
    Single(RatingsResponse),
    Many(Vec<RatingsResponse>),
}
