use std::sync::Arc;

use crate::{
    domain::{BlogPost, CommitteeMember},
    error::Result,
    repository::ContentRepository,
};

pub struct ContentService {
    repo: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    /// Blog posts, newest first.
    pub async fn posts(&self) -> Result<Vec<BlogPost>> {
        let mut posts = self.repo.list_posts().await?;
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    pub async fn committee(&self) -> Result<Vec<CommitteeMember>> {
        self.repo.list_committee().await
    }
}

/// The post with `id`, or the first (newest) one when no id is given.
/// An unknown id yields `None`.
pub fn select_post<'a>(posts: &'a [BlogPost], id: Option<&str>) -> Option<&'a BlogPost> {
    match id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => posts.iter().find(|p| p.id == id),
        None => posts.first(),
    }
}
