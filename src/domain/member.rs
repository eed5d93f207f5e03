use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An approved member, one row of the roster CSV
/// (`ID,Name,Student number,Faculty,Email`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Student number", default)]
    pub student_number: String,
    #[serde(rename = "Faculty", default)]
    pub faculty: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
}

/// A signup waiting for committee approval, one row of the pending CSV
/// (`Name,Student number,Faculty,Email,Date Joined`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectiveMember {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Student number")]
    pub student_number: String,
    #[serde(rename = "Faculty", default)]
    pub faculty: String,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Date Joined")]
    pub date_joined: NaiveDate,
}

/// Column order of the pending store, written even when the store is empty.
pub const PENDING_HEADER: [&str; 5] = ["Name", "Student number", "Faculty", "Email", "Date Joined"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_number: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Public directory row. Student numbers and emails stay off the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub faculty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacultyCount {
    pub faculty: String,
    pub count: usize,
    pub percent: u32,
}

/// Student numbers compare trimmed and upper-cased, so " stu123" and
/// "STU123" are the same applicant.
pub fn normalize_student_number(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

impl From<&Member> for DirectoryEntry {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone().unwrap_or_default(),
            faculty: member.faculty.clone().unwrap_or_default(),
        }
    }
}

impl SignupRequest {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            student_number: self.student_number.trim().to_string(),
            faculty: self.faculty.trim().to_string(),
            email: self
                .email
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
        }
    }
}
