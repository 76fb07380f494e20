use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    players::{
        get_player_ratings, get_players, get_top_players_ratings, get_top_players_ratings_csv,
        health,
    },
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/players", get(get_players))
        .route("/players/ratings", get(get_top_players_ratings))
        .route("/players/ratings/csv", get(get_top_players_ratings_csv))
        .route("/players/:username/ratings", get(get_player_ratings))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RatingGateway;
    use crate::config::settings::AppConfig;
    use crate::domain::{CurrentPerformance, PerfType, PerformanceHistory, Player, RatingPoint};
    use crate::rating::{iso_label, short_label, today};
    use crate::services::ratings::RatingsService;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubGateway {
        players: Vec<Player>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RatingGateway for StubGateway {
        async fn fetch_top_players(&self, perf: PerfType, count: u32) -> Vec<Player> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.players
                .iter()
                .filter(|player| player.current(perf).is_some())
                .take(count as usize)
                .cloned()
                .collect()
        }

        async fn fetch_rating_history(&self, username: &str) -> PerformanceHistory {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut history = PerformanceHistory::new();
            if username == "Alpha" {
                let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
                history.insert("Classical", vec![RatingPoint::new(date, 2700)]);
            }
            history
        }
    }

    fn classical_player(username: &str, rating: Option<i32>) -> Player {
        let mut perfs = HashMap::new();
        perfs.insert(
            "classical".to_string(),
            CurrentPerformance {
                rating,
                ..Default::default()
            },
        );
        Player {
            id: username.to_lowercase(),
            username: username.to_string(),
            perfs,
        }
    }

    fn test_app() -> (Router, Arc<StubGateway>) {
        let gateway = Arc::new(StubGateway {
            players: vec![classical_player("Alpha", Some(2710)), classical_player("Beta", None)],
            ..Default::default()
        });
        let state = Arc::new(AppState {
            service: RatingsService::new(gateway.clone(), 2),
            config: AppConfig::new(),
        });
        (create_router(state), gateway)
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn send_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = send(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_players_lists_usernames() {
        let (app, _) = test_app();

        let (status, body) = send_json(app, "/players?top=5&type=Classical").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["Alpha", "Beta"]));
    }

    #[tokio::test]
    async fn test_invalid_type_is_rejected_before_fetching() {
        let (app, gateway) = test_app();

        let (status, body) = send_json(app, "/players/ratings?type=bullet").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid performance type: bullet"}));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_out_of_range_parameters() {
        let (app, _) = test_app();
        let (status, _) = send(app, "/players?top=101").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (app, _) = test_app();
        let (status, _) = send(app, "/players/ratings?days=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_single_player_ratings_is_an_object() {
        let (app, _) = test_app();

        let (status, body) = send_json(app, "/players/ratings?days=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "Alpha");
        let ratings = body["ratings"].as_object().unwrap();
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[&short_label(today())], 2700);
    }

    #[tokio::test]
    async fn test_many_player_ratings_is_a_list() {
        let (app, _) = test_app();

        let (status, body) = send_json(app, "/players/ratings?top=2&days=3").await;

        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1]["username"], "Beta");
        assert!(list[1]["ratings"].as_object().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_players_is_not_found() {
        let (app, _) = test_app();

        let (status, body) = send_json(app, "/players/ratings?type=blitz").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "No player found"}));
    }

    #[tokio::test]
    async fn test_csv_export() {
        let (app, _) = test_app();
        let request = Request::builder()
            .uri("/players/ratings/csv?top=2&days=2")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=top_2_classical_ratings_2days.csv"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let csv = String::from_utf8(body.to_vec()).unwrap();
        let today = today();
        let yesterday = today.pred_opt().unwrap();
        let expected = format!(
            "username,{},{}\r\nAlpha,2700,2700\r\nBeta,,\r\n",
            iso_label(yesterday),
            iso_label(today)
        );
        assert_eq!(csv, expected);
    }

    #[tokio::test]
    async fn test_user_ratings() {
        let (app, _) = test_app();

        let (status, body) = send_json(app, "/players/Alpha/ratings?type=classical&days=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "Alpha");
        assert_eq!(body["ratings"].as_object().unwrap().len(), 3);

        let (app, _) = test_app();
        let (status, body) = send_json(app, "/players/Unknown/ratings").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"username": "Unknown", "ratings": {}}));
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app();
        let (status, body) = send(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }
}
