use crate::config::Config;
use crate::web;
use anyhow::Context;
use axum::{routing::get, Router};
use shared::{Records, Route};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<Records>,
}

impl AppState {
    pub fn new(records: Records) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Records::placeholder())
    }
}

/// Build the router for the record pages
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(Route::AnomalousRecord.path(), get(web::anomalous_record))
        .route(Route::DangerousRecord.path(), get(web::dangerous_record))
        .route("/api/anomalous_record", get(web::anomalous_record_json))
        .route("/api/dangerous_record", get(web::dangerous_record_json))
        .route("/health", get(web::health))
        .route("/healthz", get(web::health))
        .fallback(web::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    // Placeholder records until a detection source exists
    let app = router(AppState::default());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
