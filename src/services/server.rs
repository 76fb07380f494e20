use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::services::ratings::RatingsService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(self) -> Result<()> {
        let service = RatingsService::from_config(&self.config).await?;
        let state = Arc::new(AppState {
            service,
            config: self.config,
        });

        let app = create_router(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
