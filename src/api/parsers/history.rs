use anyhow::{Context, Result};

use crate::domain::{PerfHistoryResponse, PerformanceHistory};
use crate::errors::parse_context;

/// Parse the per-category rating-history payload
pub fn parse_rating_history(body: &str) -> Result<PerformanceHistory> {
    let response: Vec<PerfHistoryResponse> =
        serde_json::from_str(body).with_context(|| parse_context("rating history"))?;
    Ok(PerformanceHistory::from_response(response))
}
