use serde::Deserialize;

use crate::config::settings::{AppConfig, QueryLimits};
use crate::domain::PerfType;
use crate::errors::ApiError;
use crate::services::ratings::RatingsService;

pub mod players;

pub struct AppState {
    pub service: RatingsService,
    pub config: AppConfig,
}

const DEFAULT_PERF: &str = "classical";
const DEFAULT_DAYS: u32 = 30;

#[derive(Debug, Deserialize)]
pub struct PlayersParams {
    pub top: Option<u32>,
    #[serde(rename = "type")]
    pub perf_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RatingsParams {
    pub top: Option<u32>,
    #[serde(rename = "type")]
    pub perf_type: Option<String>,
    pub days: Option<u32>,
}

/// Validated query parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingsQuery {
    pub perf: PerfType,
    pub top: u32,
    pub days: u32,
}

impl RatingsParams {
    pub fn validate(&self, default_top: u32, limits: &QueryLimits) -> Result<RatingsQuery, ApiError> {
        Ok(RatingsQuery {
            perf: parse_perf(self.perf_type.as_deref())?,
            top: check_range("top", self.top.unwrap_or(default_top), limits.max_top)?,
            days: check_range("days", self.days.unwrap_or(DEFAULT_DAYS), limits.max_days)?,
        })
    }
}

pub fn parse_perf(perf_type: Option<&str>) -> Result<PerfType, ApiError> {
    Ok(perf_type.unwrap_or(DEFAULT_PERF).parse::<PerfType>()?)
}

/// Accept `1..=max`
pub fn check_range(name: &'static str, value: u32, max: u32) -> Result<u32, ApiError> {
    if (1..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ApiError::InvalidParameter { name, max })
    }
}
