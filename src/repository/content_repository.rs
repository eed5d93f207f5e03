use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    domain::{BlogPost, CommitteeMember},
    error::Result,
    repository::ContentRepository,
};
use super::files;

/// Blog posts and the committee list, both optional JSON files.
pub struct JsonContentRepository {
    blogs_path: PathBuf,
    committee_path: PathBuf,
}

impl JsonContentRepository {
    pub fn new(blogs_path: impl Into<PathBuf>, committee_path: impl Into<PathBuf>) -> Self {
        Self {
            blogs_path: blogs_path.into(),
            committee_path: committee_path.into(),
        }
    }
}

#[async_trait]
impl ContentRepository for JsonContentRepository {
    async fn list_posts(&self) -> Result<Vec<BlogPost>> {
        match files::read_optional(&self.blogs_path).await? {
            Some(bytes) => files::parse_json_array(&self.blogs_path, &bytes),
            None => Ok(Vec::new()),
        }
    }

    async fn list_committee(&self) -> Result<Vec<CommitteeMember>> {
        match files::read_optional(&self.committee_path).await? {
            Some(bytes) => files::parse_json_array(&self.committee_path, &bytes),
            None => Ok(Vec::new()),
        }
    }
}
