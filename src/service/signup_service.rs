use std::{collections::HashSet, sync::Arc};

use chrono::{Local, NaiveDate};
use tokio::sync::Mutex;

use crate::{
    domain::*,
    error::{AppError, Result},
    repository::{MemberRepository, PendingMemberRepository},
    service::member_service::{faculty_options, OTHER_FACULTY},
};

pub struct SignupService {
    member_repo: Arc<dyn MemberRepository>,
    pending_repo: Arc<dyn PendingMemberRepository>,
    // Held across duplicate check and append so two submissions in this
    // process can't both pass the check. Other processes are not covered.
    write_gate: Mutex<()>,
}

impl SignupService {
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        pending_repo: Arc<dyn PendingMemberRepository>,
    ) -> Self {
        Self {
            member_repo,
            pending_repo,
            write_gate: Mutex::new(()),
        }
    }

    /// Validates `request`, rejects student numbers already on the roster
    /// or pending, and appends the new applicant to the pending store.
    pub async fn submit(&self, request: SignupRequest) -> Result<ProspectiveMember> {
        self.submit_on(request, Local::now().date_naive()).await
    }

    pub async fn submit_on(&self, request: SignupRequest, today: NaiveDate) -> Result<ProspectiveMember> {
        let _guard = self.write_gate.lock().await;

        let roster = self.member_repo.load_members().await?;
        let pending = self.pending_repo.list().await?;

        let member = prepare_signup(&request, &roster, &pending, today)?;
        let stored = self.pending_repo.append(member).await?;

        tracing::info!("Accepted signup for student number {}", stored.student_number);
        Ok(stored)
    }
}

/// The checks of a signup, in order: required fields, then uniqueness of
/// the student number across roster and pending store. Returns the record
/// to store, with the student number as typed (trimmed) and the faculty
/// limited to the signup form's choices.
pub fn prepare_signup(
    request: &SignupRequest,
    roster: &[Member],
    pending: &[ProspectiveMember],
    today: NaiveDate,
) -> Result<ProspectiveMember> {
    let candidate = request.trimmed();
    if candidate.name.is_empty() || candidate.student_number.is_empty() {
        return Err(AppError::Validation("missing required field".to_string()));
    }

    let taken: HashSet<String> = roster
        .iter()
        .map(|m| normalize_student_number(&m.student_number))
        .chain(pending.iter().map(|p| normalize_student_number(&p.student_number)))
        .collect();

    if taken.contains(&normalize_student_number(&candidate.student_number)) {
        return Err(AppError::Duplicate(
            "This student number is already registered or pending approval.".to_string(),
        ));
    }

    let faculty = if faculty_options(roster).contains(&candidate.faculty) {
        candidate.faculty
    } else {
        OTHER_FACULTY.to_string()
    };

    Ok(ProspectiveMember {
        name: candidate.name,
        student_number: candidate.student_number,
        faculty,
        email: candidate.email,
        date_joined: today,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, student_number: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            student_number: student_number.to_string(),
            faculty: "Science".to_string(),
            email: Some(String::new()),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()
    }

    #[test]
    fn test_missing_fields_are_rejected_first() {
        for (name, number) in [("", "STU1"), ("Jane", ""), ("   ", "STU1"), ("Jane", " \t")] {
            let err = prepare_signup(&request(name, number), &[], &[], today()).unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m == "missing required field"));
        }
    }

    #[test]
    fn test_accepts_new_candidate() {
        let member = prepare_signup(&request(" Jane Doe ", " stu123"), &[], &[], today()).unwrap();
        assert_eq!(member.name, "Jane Doe");
        assert_eq!(member.student_number, "stu123");
        assert_eq!(member.email, None);
        assert_eq!(member.date_joined, today());
    }

    #[test]
    fn test_duplicates_against_roster_and_pending() {
        let roster = vec![Member {
            id: "1".to_string(),
            name: Some("Alice".to_string()),
            student_number: "ALC001".to_string(),
            faculty: None,
            email: None,
        }];
        let pending = vec![ProspectiveMember {
            name: "Bob".to_string(),
            student_number: "BOB002".to_string(),
            faculty: "Commerce".to_string(),
            email: None,
            date_joined: today(),
        }];

        for number in ["ALC001", "alc001 ", "BOB002"] {
            let err = prepare_signup(&request("Eve", number), &roster, &pending, today()).unwrap_err();
            assert!(matches!(err, AppError::Duplicate(_)), "{}", number);
        }
        assert!(prepare_signup(&request("Eve", "EVE003"), &roster, &pending, today()).is_ok());
    }

    #[test]
    fn test_faculty_limited_to_form_choices() {
        let roster = vec![Member {
            id: "1".to_string(),
            name: Some("Alice".to_string()),
            student_number: "ALC001".to_string(),
            faculty: Some("Science".to_string()),
            email: None,
        }];

        let mut known = request("Eve", "EVE003");
        known.faculty = " Science ".to_string();
        assert_eq!(prepare_signup(&known, &roster, &[], today()).unwrap().faculty, "Science");

        for faculty in ["", "Astrology", "Other"] {
            let mut other = request("Eve", "EVE003");
            other.faculty = faculty.to_string();
            assert_eq!(prepare_signup(&other, &roster, &[], today()).unwrap().faculty, "Other");
        }
    }
}
