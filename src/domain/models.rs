use std::collections::HashMap;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use super::category::PerfType;

/// A single recorded rating tied to a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPoint {
    pub date: NaiveDate,
    pub rating: i32,
}

impl RatingPoint {
    pub fn new(date: NaiveDate, rating: i32) -> Self {
        Self { date, rating }
    }

    /// Build a point from the provider's `[year, month, day, rating]` tuple.
    /// The provider counts months from zero.
    pub fn from_raw(raw: RawRatingPoint) -> Option<Self> {
        let [year, zero_based_month, day, rating] = raw;
        let month = u32::try_from(zero_based_month.checked_add(1)?).ok()?;
        let day = u32::try_from(day).ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self::new(date, rating))
    }
}

/// Rating checkpoints per category label, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceHistory {
    perfs: HashMap<String, Vec<RatingPoint>>,
}

impl PerformanceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, points: Vec<RatingPoint>) {
        self.perfs.insert(label.into(), points);
    }

    /// Points for a provider label such as `"Blitz"`; empty when absent
    pub fn points(&self, label: &str) -> &[RatingPoint] {
        self.perfs.get(label).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn for_perf(&self, perf: PerfType) -> &[RatingPoint] {
        self.points(perf.history_label())
    }

    pub fn from_response(response: Vec<PerfHistoryResponse>) -> Self {
        let mut history = Self::new();
        for perf in response {
            let points = perf
                .points
                .into_iter()
                .filter_map(|raw| {
                    let point = RatingPoint::from_raw(raw);
                    if point.is_none() {
                        warn!("Skipping invalid {} rating point {:?}", perf.name, raw);
                    }
                    point
                })
                .collect();
            history.insert(perf.name, points);
        }
        history
    }
}

/// Latest known rating snapshot for one category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPerformance {
    pub rating: Option<i32>,
    #[serde(rename = "prog")]
    pub progress: Option<i32>,
    #[serde(rename = "prov")]
    pub provisional: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub perfs: HashMap<String, CurrentPerformance>,
}

impl Player {
    pub fn current(&self, perf: PerfType) -> Option<&CurrentPerformance> {
        self.perfs.get(perf.as_key())
    }

    pub fn current_rating(&self, perf: PerfType) -> Option<i32> {
        self.current(perf).and_then(|current| current.rating)
    }
}

/// One exported row; `values` lines up with the table header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingRow {
    pub username: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingTable {
    pub header: Vec<String>,
    pub rows: Vec<RatingRow>,
}

// --- API Response Structures ---

/// `[year, zero-based month, day, rating]`
pub type RawRatingPoint = [i32; 4];

/// Raw top-players response from Lichess
#[derive(Debug, Deserialize)]
pub struct TopPlayersResponse {
    #[serde(default)]
    pub users: Vec<Player>,
}

/// One category of the raw rating-history response
#[derive(Debug, Deserialize)]
pub struct PerfHistoryResponse {
    pub name: String,
    #[serde(default)]
    pub points: Vec<RawRatingPoint>,
}
