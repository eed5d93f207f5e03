use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    domain::Member,
    error::Result,
    repository::MemberRepository,
};
use super::files;

pub struct CsvMemberRepository {
    path: PathBuf,
}

impl CsvMemberRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MemberRepository for CsvMemberRepository {
    async fn load_members(&self) -> Result<Vec<Member>> {
        let Some(bytes) = files::read_optional(&self.path).await? else {
            tracing::debug!("No roster at {}, treating as empty", self.path.display());
            return Ok(Vec::new());
        };

        files::parse_csv(&self.path, &bytes)
    }
}
