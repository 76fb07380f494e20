use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{AppState, PlayersParams, RatingsParams, check_range, parse_perf};
use crate::api::models::{RatingsResponse, TopRatingsResponse};
use crate::errors::ApiError;
use crate::services::export::{default_filename, render_csv};

const DEFAULT_TOP_PLAYERS: u32 = 50;
const DEFAULT_TOP_RATINGS: u32 = 1;

pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayersParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let perf = parse_perf(params.perf_type.as_deref())?;
    let top = check_range(
        "top",
        params.top.unwrap_or(DEFAULT_TOP_PLAYERS),
        state.config.limits.max_top,
    )?;

    let players = state.service.top_players(perf, top).await;
    Ok(Json(players.into_iter().map(|p| p.username).collect()))
}

pub async fn get_top_players_ratings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RatingsParams>,
) -> Result<Json<TopRatingsResponse>, ApiError> {
    let query = params.validate(DEFAULT_TOP_RATINGS, &state.config.limits)?;

    let ratings = state
        .service
        .top_players_ratings(query.perf, query.top, query.days)
        .await;

    if ratings.is_empty() {
        return Err(ApiError::NoPlayers);
    }

    let mut responses: Vec<RatingsResponse> = ratings.into_iter().map(Into::into).collect();
    let response = if query.top > 1 {
        TopRatingsResponse::Many(responses)
    } else {
        TopRatingsResponse::Single(responses.swap_remove(0))
    };

    Ok(Json(response))
}

pub async fn get_top_players_ratings_csv(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RatingsParams>,
) -> Result<Response, ApiError> {
    let query = params.validate(DEFAULT_TOP_PLAYERS, &state.config.limits)?;

    let table = state
        .service
        .ratings_table(query.perf, query.top, query.days)
        .await;

    let body = render_csv(&table)?;
    let filename = default_filename(query.perf, query.top, query.days);
    let disposition = format!("attachment; filename={}", filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

pub async fn get_player_ratings(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Query(params): Query<RatingsParams>,
) -> Result<Json<RatingsResponse>, ApiError> {
    let perf = parse_perf(params.perf_type.as_deref())?;
    let days = check_range(
        "days",
        params.days.unwrap_or(super::DEFAULT_DAYS),
        state.config.limits.max_days,
    )?;

    let series = state.service.player_ratings(&username, perf, days).await;
    Ok(Json(RatingsResponse::new(username, &series)))
}

pub async fn health() -> &'static str {
    "ok"
}
