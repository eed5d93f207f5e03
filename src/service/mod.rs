pub mod calendar_service;
pub mod contact_service;
pub mod content_service;
pub mod member_service;
pub mod signup_service;

use std::sync::Arc;
use crate::config::Settings;
use crate::repository::*;
use calendar_service::CalendarService;
use contact_service::ContactService;
use content_service::ContentService;
use member_service::MemberService;
use signup_service::SignupService;

pub use calendar_service::{build_grid, events_in_month, EventsByDay};
pub use contact_service::format_mailto;
pub use member_service::search;

pub struct ServiceContext {
    pub calendar_service: Arc<CalendarService>,
    pub member_service: Arc<MemberService>,
    pub signup_service: Arc<SignupService>,
    pub contact_service: Arc<ContactService>,
    pub content_service: Arc<ContentService>,
}

impl ServiceContext {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        member_repo: Arc<dyn MemberRepository>,
        pending_repo: Arc<dyn PendingMemberRepository>,
        content_repo: Arc<dyn ContentRepository>,
        settings: &Settings,
    ) -> Self {
        let calendar_service = Arc::new(CalendarService::new(
            event_repo,
            settings.calendar.clone(),
        ));
        let member_service = Arc::new(MemberService::new(member_repo.clone()));
        let signup_service = Arc::new(SignupService::new(member_repo, pending_repo));
        let contact_service = Arc::new(ContactService::new(settings.society.contact_email.clone()));
        let content_service = Arc::new(ContentService::new(content_repo));

        Self {
            calendar_service,
            member_service,
            signup_service,
            contact_service,
            content_service,
        }
    }

    /// Wires the flat-file repositories named in `settings.data`.
    pub fn from_settings(settings: &Settings) -> Self {
        let data = &settings.data;
        Self::new(
            Arc::new(JsonEventRepository::new(data.events_path())),
            Arc::new(CsvMemberRepository::new(data.members_path())),
            Arc::new(CsvPendingRepository::new(data.pending_path())),
            Arc::new(JsonContentRepository::new(data.blogs_path(), data.committee_path())),
            settings,
        )
    }
}
