use crate::pages::{self, PageError};
use crate::responder::{BufferedResponse, SendError};
use crate::server::AppState;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Response,
    Json,
};
use shared::{AnomalousRecord, DangerousRecord};

/// Serve the anomalous behavior page
pub async fn anomalous_record(
    State(state): State<AppState>,
) -> Result<Response, PageError<SendError>> {
    let mut writer = BufferedResponse::new();
    pages::anomalous_record_page(&mut writer, &state.records.anomalous)?;
    writer.finish().map_err(PageError::Send)
}

/// Serve the dangerous behavior page
pub async fn dangerous_record(
    State(state): State<AppState>,
) -> Result<Response, PageError<SendError>> {
    let mut writer = BufferedResponse::new();
    pages::dangerous_record_page(&mut writer, &state.records.dangerous)?;
    writer.finish().map_err(PageError::Send)
}

/// Anomalous behavior record as JSON
pub async fn anomalous_record_json(State(state): State<AppState>) -> Json<AnomalousRecord> {
    Json(state.records.anomalous.clone())
}

/// Dangerous behavior record as JSON
pub async fn dangerous_record_json(State(state): State<AppState>) -> Json<DangerousRecord> {
    Json(state.records.dangerous.clone())
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    tracing::warn!("No route for {}", uri);
    (StatusCode::NOT_FOUND, "not found")
}
