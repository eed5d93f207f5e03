use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    domain::Event,
    error::{AppError, Result},
    repository::EventRepository,
};
use super::files;

pub struct JsonEventRepository {
    path: PathBuf,
}

impl JsonEventRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventRepository for JsonEventRepository {
    async fn load_events(&self) -> Result<Vec<Event>> {
        let bytes = files::read_optional(&self.path).await?.ok_or_else(|| {
            AppError::DataUnavailable(format!("{} not found", self.path.display()))
        })?;

        let events: Vec<Event> = files::parse_json_array(&self.path, &bytes)?;
        tracing::debug!("Loaded {} events from {}", events.len(), self.path.display());
        Ok(events)
    }
}
