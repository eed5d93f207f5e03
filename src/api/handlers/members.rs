use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::DirectoryEntry,
    error::Result,
};

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    pub q: Option<String>,
}

/// GET /api/members?q= (public Name/Faculty listing)
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<Vec<DirectoryEntry>>> {
    let entries = state
        .service_context
        .member_service
        .directory(query.q.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(entries))
}
