use validator::Validate;

use crate::{
    domain::{ContactRequest, MailDraft, ProspectiveMember},
    error::{AppError, Result},
};

/// Builds the `mailto:` drafts the site hands to the visitor's mail
/// client. Nothing is sent from the server.
pub struct ContactService {
    to_address: String,
}

impl ContactService {
    pub fn new(to_address: impl Into<String>) -> Self {
        Self { to_address: to_address.into() }
    }

    /// Validates the contact form and turns it into a draft.
    pub fn contact_draft(&self, request: &ContactRequest) -> Result<MailDraft> {
        let request = request.trimmed();
        request.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Please fill in all fields.".to_string());
            AppError::Validation(message)
        })?;

        Ok(MailDraft {
            to: self.to_address.clone(),
            subject: format!("Contact Form: {} - {}", request.subject.as_str(), request.name),
            body: request.message,
        })
    }

    /// The email a new applicant sends to finish registering.
    pub fn registration_draft(&self, member: &ProspectiveMember) -> MailDraft {
        MailDraft {
            to: self.to_address.clone(),
            subject: format!("New Member Registration: {}", member.name),
            body: format!(
                "Name: {}\nStudent Number: {}\nFaculty: {}\nEmail: {}",
                member.name,
                member.student_number,
                member.faculty,
                member.email.as_deref().unwrap_or_default(),
            ),
        }
    }
}

impl MailDraft {
    pub fn to_mailto(&self) -> String {
        format_mailto(&self.to, &self.subject, &self.body)
    }
}

/// `mailto:` URI with percent-encoded subject and body. Everything but
/// RFC 3986 unreserved characters is escaped, so spaces become `%20`
/// (never `+`) and `&`, `=`, `?` and newlines survive the round trip.
pub fn format_mailto(to_address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to_address.trim(),
        urlencoding::encode(subject),
        urlencoding::encode(body),
    )
}
