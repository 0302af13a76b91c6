//! Project domain model.
//!
//! # Responsibility
//! - Define the record rendered by the projects listing and detail page.
//!
//! # Invariants
//! - `id` is unique within the project collection and addresses
//!   `/projects/<id>`.
//! - `technologies` and `images` keep source order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable routing key for catalog records.
pub type RecordId = String;

/// Portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Technology tags, matched case-sensitively by facet groups.
    pub technologies: Vec<String>,
    /// Image references in gallery order.
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    /// Serialized as `githubLink` to match the fixture schema.
    #[serde(
        default,
        rename = "githubLink",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_link: Option<String>,
    /// Missing in the fixture means not featured.
    #[serde(default)]
    pub featured: bool,
    pub completed_date: NaiveDate,
}

impl Project {
    /// Creates a project with empty tag/image lists and no links.
    pub fn new(
        id: impl Into<RecordId>,
        title: impl Into<String>,
        completed_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            technologies: Vec::new(),
            images: Vec::new(),
            demo_link: None,
            source_link: None,
            featured: false,
            completed_date,
        }
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// Returns whether any technology tag appears in `reference`.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn uses_any(&self, reference: &[&str]) -> bool {
        self.technologies
            .iter()
            .any(|tech| reference.contains(&tech.as_str()))
    }

    /// Two-letter placeholder built from the first letters of title words.
    pub fn initials(&self) -> String {
        self.title
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Project;
    use chrono::NaiveDate;

    fn sample() -> Project {
        let mut project = Project::new(
            "neural-canvas",
            "Neural Canvas Studio",
            NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
        );
        project.technologies = vec!["React".to_string(), "TensorFlow".to_string()];
        project
    }

    #[test]
    fn uses_any_is_case_sensitive() {
        let project = sample();
        assert!(project.uses_any(&["React"]));
        assert!(!project.uses_any(&["react"]));
        assert!(!project.uses_any(&[]));
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(sample().initials(), "NC");
    }

    #[test]
    fn featured_defaults_to_false_on_decode() {
        let value = serde_json::json!({
            "id": "p1",
            "title": "Plain",
            "description": "",
            "technologies": [],
            "images": [],
            "completedDate": "2024-12-01"
        });
        let project: Project = serde_json::from_value(value).expect("decode project");
        assert!(!project.is_featured());
        assert_eq!(project.demo_link, None);
        assert_eq!(project.source_link, None);
    }
}
