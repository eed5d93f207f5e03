use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};

use crate::{
    api::state::AppState,
    domain::{ContactRequest, ContactSubject, SubmissionOutcome},
    web::templates::{FormFeedback, HtmlTemplate, PageContext},
};

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: PageContext,
    pub subjects: Vec<SubjectOption>,
    pub form: ContactRequest,
    pub feedback: Option<FormFeedback>,
}

pub struct SubjectOption {
    pub label: &'static str,
    pub selected: bool,
}

// GET /about
pub async fn about_page(State(state): State<AppState>) -> Response {
    render(&state, ContactRequest::default(), None).into_response()
}

// POST /about/contact
pub async fn contact_handler(
    State(state): State<AppState>,
    Form(form): Form<ContactRequest>,
) -> Response {
    match state.service_context.contact_service.contact_draft(&form) {
        Ok(draft) => {
            let thanks = format!(
                "Thank you, {}! Click the button below to send your message.",
                form.name.trim()
            );
            let outcome = SubmissionOutcome::DraftReady { mailto: draft.to_mailto() };
            let feedback = FormFeedback::from_outcome(outcome, thanks);
            render(&state, ContactRequest::default(), Some(feedback)).into_response()
        }
        Err(e) => {
            let feedback = FormFeedback::error(e.user_message());
            (StatusCode::UNPROCESSABLE_ENTITY, render(&state, form, Some(feedback))).into_response()
        }
    }
}

fn render(
    state: &AppState,
    form: ContactRequest,
    feedback: Option<FormFeedback>,
) -> HtmlTemplate<AboutTemplate> {
    HtmlTemplate(AboutTemplate {
        page: PageContext::new(&state.settings, "About", "/about"),
        subjects: subject_options(form.subject),
        form,
        feedback,
    })
}

fn subject_options(current: ContactSubject) -> Vec<SubjectOption> {
    ContactSubject::ALL
        .iter()
        .map(|subject| SubjectOption {
            label: subject.as_str(),
            selected: *subject == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_current_subject_is_selected() {
        let options = subject_options(ContactSubject::EventQuestion);
        assert_eq!(options.len(), ContactSubject::ALL.len());
        let selected: Vec<&str> = options.iter().filter(|o| o.selected).map(|o| o.label).collect();
        assert_eq!(selected, vec!["Event Question"]);
    }

    #[test]
    fn test_about_page_renders_selected_subject() {
        let form = ContactRequest {
            subject: ContactSubject::EventQuestion,
            ..ContactRequest::default()
        };
        let html = AboutTemplate {
            page: PageContext::new(&crate::config::Settings::default(), "About", "/about"),
            subjects: subject_options(form.subject),
            form,
            feedback: None,
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"<option value="Event Question" selected>"#));
        assert!(html.contains(r#"<option value="General Inquiry">"#));
    }
}
