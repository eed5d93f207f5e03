use serde::{Deserialize, Serialize};

use super::event::deserialize_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// ISO date; posts sort newest first on this string.
    pub date: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// Committee seats that are still open are listed under this name.
pub const VACANT_SEAT: &str = "TBD";

impl BlogPost {
    /// IEEE-style reference for posts that point at a paper.
    pub fn citation(&self) -> Option<String> {
        self.pdf_url.as_ref().map(|url| {
            format!(
                "[1] {}, \"{}\", Nature Communications, {}. [Online]. Available: {}",
                self.author, self.title, self.date, url
            )
        })
    }

    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

impl CommitteeMember {
    pub fn linkedin_label(&self) -> Option<String> {
        self.linkedin.as_ref().filter(|url| !url.is_empty())?;

        if self.name == VACANT_SEAT {
            return Some("Follow Us on LinkedIn".to_string());
        }

        let first_name = self.name.split_whitespace().next().unwrap_or(&self.name);
        Some(format!("Visit {}'s LinkedIn", first_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committee(name: &str, linkedin: Option<&str>) -> CommitteeMember {
        CommitteeMember {
            name: name.to_string(),
            role: "Chairperson".to_string(),
            image: String::new(),
            linkedin: linkedin.map(str::to_string),
        }
    }

    #[test]
    fn test_linkedin_label() {
        let url = Some("https://www.linkedin.com/in/someone");
        assert_eq!(
            committee("Thandi Mokoena", url).linkedin_label().as_deref(),
            Some("Visit Thandi's LinkedIn")
        );
        assert_eq!(
            committee("TBD", url).linkedin_label().as_deref(),
            Some("Follow Us on LinkedIn")
        );
        assert_eq!(committee("Thandi Mokoena", None).linkedin_label(), None);
        assert_eq!(committee("Thandi Mokoena", Some("")).linkedin_label(), None);
    }

    #[test]
    fn test_citation_only_with_pdf() {
        let mut post = BlogPost {
            id: "1".to_string(),
            title: "Error Mitigation at Scale".to_string(),
            author: "A. Researcher".to_string(),
            date: "2026-01-20".to_string(),
            tag: "research".to_string(),
            content: "First.\n\nSecond.".to_string(),
            pdf_url: None,
        };
        assert_eq!(post.citation(), None);
        assert_eq!(post.paragraphs(), vec!["First.", "Second."]);

        post.pdf_url = Some("https://example.org/paper.pdf".to_string());
        assert_eq!(
            post.citation().unwrap(),
            "[1] A. Researcher, \"Error Mitigation at Scale\", Nature Communications, 2026-01-20. [Online]. Available: https://example.org/paper.pdf"
        );
    }
}
