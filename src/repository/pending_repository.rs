use std::{
    fs::Permissions,
    io::Write,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use crate::{
    domain::{ProspectiveMember, PENDING_HEADER},
    error::{AppError, Result},
    repository::PendingMemberRepository,
};
use super::files;

pub struct CsvPendingRepository {
    path: PathBuf,
}

impl CsvPendingRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PendingMemberRepository for CsvPendingRepository {
    async fn list(&self) -> Result<Vec<ProspectiveMember>> {
        match files::read_optional(&self.path).await? {
            Some(bytes) => files::parse_csv(&self.path, &bytes),
            None => Ok(Vec::new()),
        }
    }

    async fn append(&self, member: ProspectiveMember) -> Result<ProspectiveMember> {
        let mut rows = self.list().await?;
        rows.push(member.clone());

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &rows))
            .await
            .map_err(|e| AppError::Internal(format!("Pending store writer panicked: {}", e)))??;

        tracing::info!("Appended pending signup to {}", self.path.display());
        Ok(member)
    }
}

/// Serializes `rows` to a temp file next to `path`, then renames it into
/// place. Readers see either the old store or the new one.
fn write_atomically(path: &Path, rows: &[ProspectiveMember]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(tmp.as_file_mut());

        writer.write_record(PENDING_HEADER)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        for row in rows {
            writer.serialize(row).map_err(|e| AppError::Internal(e.to_string()))?;
        }
        writer.flush()?;
    }
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(store_permissions(path, &tmp)?)?;

    tmp.persist(path)
        .map_err(|e| AppError::Internal(format!("Failed to replace {}: {}", path.display(), e)))?;

    Ok(())
}

/// The replaced store keeps the mode of the file it replaces. A new store
/// is world-readable rather than the temp file's owner-only mode.
fn store_permissions(path: &Path, tmp: &NamedTempFile) -> std::io::Result<Permissions> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(meta.permissions()),
        _ => new_store_permissions(tmp),
    }
}

#[cfg(unix)]
fn new_store_permissions(_tmp: &NamedTempFile) -> std::io::Result<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_store_permissions(tmp: &NamedTempFile) -> std::io::Result<Permissions> {
    Ok(tmp.as_file().metadata()?.permissions())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant() -> ProspectiveMember {
        ProspectiveMember {
            name: "Jane Doe".to_string(),
            student_number: "STU123".to_string(),
            faculty: "Science".to_string(),
            email: None,
            date_joined: chrono::NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
        }
    }

    #[test]
    fn test_failed_replace_is_internal_and_leaves_nothing_behind() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("prospective_members.csv");
        std::fs::create_dir(&target).unwrap();

        let err = write_atomically(&target, &[applicant()]).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)), "{:?}", err);

        assert!(target.is_dir());
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
        let leftovers: Vec<_> = std::fs::read_dir(root.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("prospective_members.csv")]);
    }

    #[test]
    fn test_failed_replace_keeps_previous_store() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("prospective_members.csv");
        write_atomically(&target, &[applicant()]).unwrap();
        let before = std::fs::read(&target).unwrap();

        // A plain file where the store's directory should be.
        let blocked = root.path().join("blocked").join("prospective_members.csv");
        std::fs::write(root.path().join("blocked"), b"not a directory").unwrap();
        let err = write_atomically(&blocked, &[applicant(), applicant()]).unwrap_err();
        assert!(matches!(err, AppError::Internal(_)), "{:?}", err);

        assert_eq!(std::fs::read(&target).unwrap(), before);
    }
}
