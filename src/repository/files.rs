use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

/// Reads a whole file, mapping "not found" to `None`.
pub(super) async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::DataUnavailable(format!("{}: {}", path.display(), e))),
    }
}

pub(super) fn parse_json_array<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<Vec<T>> {
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::DataUnavailable(format!("{}: {}", path.display(), e)))
}

pub(super) fn parse_csv<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|e| AppError::DataUnavailable(format!("{}: {}", path.display(), e)))
}
