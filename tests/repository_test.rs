use qcs_site::{
    domain::ProspectiveMember,
    error::AppError,
    repository::{
        ContentRepository, CsvMemberRepository, CsvPendingRepository, EventRepository,
        JsonContentRepository, JsonEventRepository, MemberRepository, PendingMemberRepository,
    },
};

const EVENTS_JSON: &str = r#"[
    {"id": 1, "title": "Qiskit Workshop", "date": "2026-02-14", "time": "18:00",
     "location": "Snape LT1", "description": "Circuits", "type": "workshop"},
    {"id": 2, "title": "Movie Night", "date": "2026-02-14", "time": "20:00",
     "location": "Kramer", "description": "Popcorn", "type": "social"}
]"#;

const MEMBERS_CSV: &str = "\
ID,Name,Student number,Faculty,Email
1,Alice Mokoena,MKNALI001,Science,alice@myuct.ac.za
2,,ANON002,Commerce,
3,Bob Smith,SMTBOB003,,bob@myuct.ac.za
";

#[tokio::test]
async fn test_load_events_is_idempotent() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("events.json");
    std::fs::write(&path, EVENTS_JSON)?;

    let repo = JsonEventRepository::new(&path);
    let first = repo.load_events().await?;
    let second = repo.load_events().await?;

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    assert_eq!(first[0].id, "1");
    assert_eq!(first[1].event_type, "social");

    Ok(())
}

#[tokio::test]
async fn test_missing_or_malformed_events_are_data_unavailable() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let missing = JsonEventRepository::new(dir.path().join("nope.json"));
    assert!(matches!(missing.load_events().await, Err(AppError::DataUnavailable(_))));

    let path = dir.path().join("events.json");
    std::fs::write(&path, r#"[{"id": 1, "title": "No date"}]"#)?;
    let malformed = JsonEventRepository::new(&path);
    assert!(matches!(malformed.load_events().await, Err(AppError::DataUnavailable(_))));

    Ok(())
}

#[tokio::test]
async fn test_load_members() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("members.csv");
    std::fs::write(&path, MEMBERS_CSV)?;

    let repo = CsvMemberRepository::new(&path);
    let members = repo.load_members().await?;

    assert_eq!(members.len(), 3);
    assert_eq!(members[0].name.as_deref(), Some("Alice Mokoena"));
    assert_eq!(members[0].student_number, "MKNALI001");
    assert_eq!(members[1].name, None);
    assert_eq!(members[1].email, None);
    assert_eq!(members[2].faculty, None);
    assert_eq!(members, repo.load_members().await?);

    Ok(())
}

#[tokio::test]
async fn test_missing_roster_is_empty() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repo = CsvMemberRepository::new(dir.path().join("members.csv"));
    assert!(repo.load_members().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_pending_store_created_with_header() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("prospective_members.csv");
    let repo = CsvPendingRepository::new(&path);

    assert!(repo.list().await?.is_empty());

    let jane = ProspectiveMember {
        name: "Jane Doe".to_string(),
        student_number: "STU123".to_string(),
        faculty: "Science".to_string(),
        email: None,
        date_joined: "2026-02-03".parse()?,
    };
    let john = ProspectiveMember {
        name: "John, Jr.".to_string(),
        student_number: "STU456".to_string(),
        faculty: "Law".to_string(),
        email: Some("john@myuct.ac.za".to_string()),
        date_joined: "2026-02-04".parse()?,
    };
    repo.append(jane.clone()).await?;
    repo.append(john.clone()).await?;

    let contents = std::fs::read_to_string(&path)?;
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("Name,Student number,Faculty,Email,Date Joined"));
    assert_eq!(lines.next(), Some("Jane Doe,STU123,Science,,2026-02-03"));
    assert_eq!(lines.next(), Some("\"John, Jr.\",STU456,Law,john@myuct.ac.za,2026-02-04"));
    assert_eq!(lines.next(), None);

    assert_eq!(repo.list().await?, vec![jane, john]);

    Ok(())
}

#[tokio::test]
async fn test_content_files_are_optional() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repo = JsonContentRepository::new(dir.path().join("blogs.json"), dir.path().join("committee.json"));

    assert!(repo.list_posts().await?.is_empty());
    assert!(repo.list_committee().await?.is_empty());

    std::fs::write(
        dir.path().join("committee.json"),
        r#"[{"name": "TBD", "role": "Secretary", "image": "", "linkedin": "https://linkedin.com"}]"#,
    )?;
    let committee = repo.list_committee().await?;
    assert_eq!(committee.len(), 1);
    assert_eq!(committee[0].linkedin_label().as_deref(), Some("Follow Us on LinkedIn"));

    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn test_pending_store_keeps_file_mode() -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prospective_members.csv");
    let repo = CsvPendingRepository::new(&path);
    let applicant = |number: &str| ProspectiveMember {
        name: "Jane Doe".to_string(),
        student_number: number.to_string(),
        faculty: "Science".to_string(),
        email: None,
        date_joined: chrono::NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
    };

    // New stores are readable by other accounts.
    repo.append(applicant("STU1")).await?;
    assert_eq!(std::fs::metadata(&path)?.permissions().mode() & 0o777, 0o644);

    // Existing stores keep whatever mode they had.
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640))?;
    repo.append(applicant("STU2")).await?;
    assert_eq!(std::fs::metadata(&path)?.permissions().mode() & 0o777, 0o640);
    assert_eq!(repo.list().await?.len(), 2);

    Ok(())
}
