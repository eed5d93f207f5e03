use askama::Template;
use axum::{
    response::{Html, IntoResponse, Response},
    http::StatusCode,
};

use crate::{config::Settings, domain::SubmissionOutcome};

/// Site sections shown in the navigation bar, in display order.
pub const PAGES: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Events", "/events"),
    ("Community", "/community"),
    ("Blog", "/blog"),
    ("About", "/about"),
];

#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

// Built per request; templates never read global state.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub site_name: String,
    pub short_name: String,
    pub title: String,
    pub nav: Vec<NavItem>,
}

impl PageContext {
    pub fn new(settings: &Settings, title: &str, active_path: &str) -> Self {
        Self {
            site_name: settings.society.name.clone(),
            short_name: settings.society.short_name.clone(),
            title: title.to_string(),
            nav: PAGES
                .iter()
                .map(|&(label, path)| NavItem {
                    label,
                    path,
                    active: path == active_path,
                })
                .collect(),
        }
    }
}

/// Inline message shown under a form after it was submitted.
#[derive(Debug, Clone)]
pub struct FormFeedback {
    pub is_error: bool,
    pub message: String,
    pub mailto: Option<String>,
}

impl FormFeedback {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            message: message.into(),
            mailto: None,
        }
    }

    pub fn from_outcome(outcome: SubmissionOutcome, success_message: String) -> Self {
        match outcome {
            SubmissionOutcome::Rejected { reason } => Self::error(reason),
            SubmissionOutcome::Registered { mailto, .. } | SubmissionOutcome::DraftReady { mailto } => Self {
                is_error: false,
                message: success_message,
                mailto: Some(mailto),
            },
        }
    }
}

// Make askama templates work with axum
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render page",
                ).into_response()
            }
        }
    }
}
