use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::{CommitteeMember, DirectoryEntry, FacultyCount, SignupRequest, SubmissionOutcome},
    error::AppError,
    service::member_service::{faculty_distribution, faculty_options, search},
    web::templates::{FormFeedback, HtmlTemplate, PageContext},
};

#[derive(Template)]
#[template(path = "community.html")]
pub struct CommunityTemplate {
    pub page: PageContext,
    pub total_members: usize,
    pub faculties: Vec<FacultyCount>,
    pub committee: Vec<CommitteeCard>,
    pub search_query: String,
    pub directory: Vec<DirectoryEntry>,
    pub faculty_options: Vec<String>,
    pub form: SignupRequest,
    pub form_email: String,
    pub feedback: Option<FormFeedback>,
    pub notice: Option<String>,
}

pub struct CommitteeCard {
    pub member: CommitteeMember,
    pub link_label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommunityQuery {
    pub q: Option<String>,
}

// GET /community
pub async fn community_page(
    State(state): State<AppState>,
    Query(query): Query<CommunityQuery>,
) -> Response {
    let search_query = query.q.unwrap_or_default();
    render(&state, search_query, SignupRequest::default(), None)
        .await
        .into_response()
}

// POST /community/signup
pub async fn signup_handler(
    State(state): State<AppState>,
    Form(form): Form<SignupRequest>,
) -> Response {
    let services = &state.service_context;

    let (status, outcome) = match services.signup_service.submit(form.clone()).await {
        Ok(member) => {
            let mailto = services.contact_service.registration_draft(&member).to_mailto();
            (StatusCode::OK, SubmissionOutcome::Registered { member, mailto })
        }
        Err(AppError::Validation(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            SubmissionOutcome::Rejected {
                reason: "Please fill in at least Name and Student Number.".to_string(),
            },
        ),
        Err(e @ AppError::Duplicate(_)) => (
            StatusCode::CONFLICT,
            SubmissionOutcome::Rejected { reason: e.user_message() },
        ),
        Err(e) => {
            tracing::error!("Signup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                SubmissionOutcome::Rejected { reason: e.user_message() },
            )
        }
    };

    // Keep what the visitor typed unless the signup went through.
    let (form, welcome) = match &outcome {
        SubmissionOutcome::Registered { member, .. } => (
            SignupRequest::default(),
            format!("Welcome, {}! You have been added to the prospective members list.", member.name),
        ),
        _ => (form, String::new()),
    };

    let feedback = FormFeedback::from_outcome(outcome, welcome);
    let page = render(&state, String::new(), form, Some(feedback)).await;
    (status, page).into_response()
}

async fn render(
    state: &AppState,
    search_query: String,
    form: SignupRequest,
    feedback: Option<FormFeedback>,
) -> HtmlTemplate<CommunityTemplate> {
    let services = &state.service_context;

    let (members, notice) = match services.member_service.load_members().await {
        Ok(members) => (members, None),
        Err(e) => {
            tracing::warn!("Showing empty member list: {}", e);
            (Vec::new(), Some("The member list is unavailable right now.".to_string()))
        }
    };

    let committee = services
        .content_service
        .committee()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Committee unavailable: {}", e);
            Vec::new()
        })
        .into_iter()
        .map(|member| CommitteeCard {
            link_label: member.linkedin_label(),
            member,
        })
        .collect();

    let directory = search(&members, &search_query)
        .iter()
        .map(DirectoryEntry::from)
        .collect();

    HtmlTemplate(CommunityTemplate {
        page: PageContext::new(&state.settings, "Community", "/community"),
        total_members: members.len(),
        faculties: faculty_distribution(&members),
        committee,
        search_query,
        directory,
        faculty_options: faculty_options(&members),
        form_email: form.email.clone().unwrap_or_default(),
        form,
        feedback,
        notice,
    })
}
