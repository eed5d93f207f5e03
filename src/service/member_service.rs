use std::{collections::BTreeMap, sync::Arc};

use crate::{
    domain::*,
    error::Result,
    repository::MemberRepository,
};

/// Faculty offered on the signup form even when nobody from it has joined yet.
pub const OTHER_FACULTY: &str = "Other";

pub struct MemberService {
    repo: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(repo: Arc<dyn MemberRepository>) -> Self {
        Self { repo }
    }

    pub async fn load_members(&self) -> Result<Vec<Member>> {
        self.repo.load_members().await
    }

    /// Name/Faculty rows of the members whose name matches `query`.
    pub async fn directory(&self, query: &str) -> Result<Vec<DirectoryEntry>> {
        let members = self.repo.load_members().await?;
        Ok(search(&members, query).iter().map(DirectoryEntry::from).collect())
    }
}

/// Case-insensitive substring match on the member name. An empty query
/// returns everyone; members without a name never match a real query.
pub fn search(members: &[Member], query: &str) -> Vec<Member> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return members.to_vec();
    }

    members
        .iter()
        .filter(|m| {
            m.name
                .as_deref()
                .map(|name| name.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Member counts per faculty, largest first.
pub fn faculty_distribution(members: &[Member]) -> Vec<FacultyCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for faculty in members.iter().filter_map(|m| m.faculty.as_deref()) {
        let faculty = faculty.trim();
        if !faculty.is_empty() {
            *counts.entry(faculty.to_string()).or_default() += 1;
        }
    }

    let total: usize = counts.values().sum();
    let mut distribution: Vec<FacultyCount> = counts
        .into_iter()
        .map(|(faculty, count)| FacultyCount {
            faculty,
            count,
            percent: ((count * 100 + total / 2) / total.max(1)) as u32,
        })
        .collect();

    // BTreeMap order breaks ties alphabetically; the sort is stable.
    distribution.sort_by(|a, b| b.count.cmp(&a.count));
    distribution
}

/// Signup form choices: every faculty already on the roster, sorted,
/// followed by "Other".
pub fn faculty_options(members: &[Member]) -> Vec<String> {
    let mut options: Vec<String> = members
        .iter()
        .filter_map(|m| m.faculty.as_deref())
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();
    options.sort();
    options.dedup();

    if !options.iter().any(|f| f == OTHER_FACULTY) {
        options.push(OTHER_FACULTY.to_string());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: Option<&str>, faculty: Option<&str>) -> Member {
        Member {
            id: "1".to_string(),
            name: name.map(str::to_string),
            student_number: "STU001".to_string(),
            faculty: faculty.map(str::to_string),
            email: None,
        }
    }

    #[test]
    fn test_search_matches_substring_case_insensitively() {
        let members = vec![member(Some("Alice"), None), member(Some("Bob"), None)];
        assert_eq!(search(&members, "ali"), vec![member(Some("Alice"), None)]);
        assert_eq!(search(&members, "BOB"), vec![member(Some("Bob"), None)]);
        assert!(search(&members, "carol").is_empty());
    }

    #[test]
    fn test_empty_query_returns_everyone_unchanged() {
        let members = vec![member(Some("Bob"), None), member(None, None), member(Some("Alice"), None)];
        assert_eq!(search(&members, ""), members);
        assert_eq!(search(&members, "   "), members);
    }

    #[test]
    fn test_search_skips_nameless_members() {
        let members = vec![member(None, Some("Science")), member(Some("Alina"), None)];
        assert_eq!(search(&members, "a"), vec![member(Some("Alina"), None)]);
    }

    #[test]
    fn test_faculty_distribution() {
        let members = vec![
            member(Some("A"), Some("Science")),
            member(Some("B"), Some("Engineering")),
            member(Some("C"), Some("Science")),
            member(Some("D"), None),
            member(Some("E"), Some("Commerce")),
        ];
        let dist = faculty_distribution(&members);
        let summary: Vec<_> = dist.iter().map(|f| (f.faculty.as_str(), f.count, f.percent)).collect();
        assert_eq!(
            summary,
            vec![("Science", 2, 50), ("Commerce", 1, 25), ("Engineering", 1, 25)]
        );
    }

    #[test]
    fn test_faculty_options() {
        let members = vec![
            member(Some("A"), Some("Science")),
            member(Some("B"), Some("Commerce")),
            member(Some("C"), Some("Science")),
            member(Some("D"), Some("  ")),
        ];
        assert_eq!(faculty_options(&members), vec!["Commerce", "Science", "Other"]);
        assert_eq!(faculty_options(&[]), vec!["Other"]);
    }
}
