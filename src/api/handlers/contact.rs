use axum::{extract::State, Json};

use crate::{
    api::state::AppState,
    domain::{ContactRequest, SubmissionOutcome},
    error::Result,
};

/// POST /api/contact. Returns the mailto link; nothing is stored or sent.
pub async fn contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<SubmissionOutcome>> {
    let draft = state.service_context.contact_service.contact_draft(&request)?;
    Ok(Json(SubmissionOutcome::DraftReady { mailto: draft.to_mailto() }))
}
