use axum::{extract::State, http::StatusCode, Json, response::IntoResponse};
use serde::Serialize;
use serde_json::json;

use crate::api::state::AppState;

#[derive(Serialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub status: String,
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

pub async fn api_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiInfo {
        name: format!("{} API", state.settings.society.short_name),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: format!("Events, members and signups for the {}", state.settings.society.name),
        status: "operational".to_string(),
    })
}
