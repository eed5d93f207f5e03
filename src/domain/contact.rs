use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContactSubject {
    #[default]
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Membership Support")]
    MembershipSupport,
    #[serde(rename = "Partnership/Sponsorship")]
    Partnership,
    #[serde(rename = "Event Question")]
    EventQuestion,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 4] = [
        ContactSubject::GeneralInquiry,
        ContactSubject::MembershipSupport,
        ContactSubject::Partnership,
        ContactSubject::EventQuestion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSubject::GeneralInquiry => "General Inquiry",
            ContactSubject::MembershipSupport => "Membership Support",
            ContactSubject::Partnership => "Partnership/Sponsorship",
            ContactSubject::EventQuestion => "Event Question",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    #[serde(default)]
    pub name: String,
    #[validate(
        length(min = 1, message = "Please fill in all fields."),
        email(message = "Please enter a valid email address.")
    )]
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: ContactSubject,
    #[validate(length(min = 1, message = "Please fill in all fields."))]
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject,
            // Keep inner line breaks; only the outer whitespace goes.
            message: self.message.trim().to_string(),
        }
    }
}

/// A pre-filled email the visitor sends from their own mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}
