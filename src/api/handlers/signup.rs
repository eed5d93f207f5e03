use axum::{extract::State, http::StatusCode, Json};

use crate::{
    api::state::AppState,
    domain::{SignupRequest, SubmissionOutcome},
    error::Result,
};

/// POST /api/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SubmissionOutcome>)> {
    let services = &state.service_context;
    let member = services.signup_service.submit(request).await?;
    let mailto = services.contact_service.registration_draft(&member).to_mailto();

    Ok((StatusCode::CREATED, Json(SubmissionOutcome::Registered { member, mailto })))
}
