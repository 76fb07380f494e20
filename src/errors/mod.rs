use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;
use thiserror::Error;

use crate::domain::CategoryError;

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to cache errors
pub fn cache_context(operation: &str, key: &str) -> String {
    format!("Failed to {} cache for key: {}", operation, key)
}

/// Errors reported to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidCategory(#[from] CategoryError),
    #[error("Invalid parameter {name}: must be between 1 and {max}")]
    InvalidParameter { name: &'static str, max: u32 },
    #[error("No player found")]
    NoPlayers,
    #[error(transparent)]
    Export(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCategory(_) | ApiError::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NoPlayers => StatusCode::NOT_FOUND,
            ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Export(err) = &self {
            error!("{:#}", err);
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
