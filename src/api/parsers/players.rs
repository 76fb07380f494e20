use anyhow::{Context, Result};

use crate::domain::{Player, TopPlayersResponse};
use crate::errors::parse_context;

/// Parse the `{"users": [...]}` top-players payload
pub fn parse_top_players(body: &str) -> Result<Vec<Player>> {
    let response: TopPlayersResponse =
        serde_json::from_str(body).with_context(|| parse_context("top players"))?;
    Ok(response.users)
}
