use async_trait::async_trait;
use crate::domain::*;
use crate::error::Result;

mod files;
pub mod member_repository;
pub mod event_repository;
pub mod pending_repository;
pub mod content_repository;

pub use member_repository::CsvMemberRepository;
pub use event_repository::JsonEventRepository;
pub use pending_repository::CsvPendingRepository;
pub use content_repository::JsonContentRepository;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Every event in the backing file, in file order.
    async fn load_events(&self) -> Result<Vec<Event>>;
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// The approved roster. A missing file is an empty roster.
    async fn load_members(&self) -> Result<Vec<Member>>;
}

#[async_trait]
pub trait PendingMemberRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ProspectiveMember>>;
    /// Persists `member` after the existing rows. Either the whole store is
    /// rewritten with the new row or it is left untouched.
    async fn append(&self, member: ProspectiveMember) -> Result<ProspectiveMember>;
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<BlogPost>>;
    async fn list_committee(&self) -> Result<Vec<CommitteeMember>>;
}
