//! Catalog Store: the industries and courses the engine matches against.
//!
//! A `Catalog` is immutable once published. Changes go through `CatalogStore`,
//! which validates a modified copy and swaps it in as the new snapshot.

pub mod handlers;
pub mod seed;
pub mod store;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::catalog::{Course, Industry};
use crate::recommendation::normalizer::normalize_skill;

pub use store::CatalogStore;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),

    #[error("{0}")]
    Duplicate(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub industries: Vec<Industry>,
    pub courses: Vec<Course>,
}

impl Catalog {
    /// Loads a catalog from a JSON file shaped `{ "industries": [...], "courses": [...] }`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        for industry in &self.industries {
            let name = industry.name.trim();
            if name.is_empty() {
                return Err(CatalogError::Invalid("industry name cannot be empty".into()));
            }
            check_skills(&format!("industry '{name}'"), &industry.skills)?;
            if !names.insert(name.to_lowercase()) {
                return Err(CatalogError::Duplicate(format!(
                    "industry '{name}' already exists"
                )));
            }
        }

        let mut codes = HashSet::new();
        for course in &self.courses {
            let code = course.code.trim();
            if code.is_empty() {
                return Err(CatalogError::Invalid("course code cannot be empty".into()));
            }
            if course.name.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "course '{code}' must have a name"
                )));
            }
            check_skills(&format!("course '{code}'"), &course.skills)?;
            if !codes.insert(code.to_lowercase()) {
                return Err(CatalogError::Duplicate(format!(
                    "course '{code}' already exists"
                )));
            }
        }

        Ok(())
    }

    /// Every distinct skill label in the catalog, industries first, keeping first spelling.
    pub fn skill_vocabulary(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.industries
            .iter()
            .flat_map(|i| i.skills.iter())
            .chain(self.courses.iter().flat_map(|c| c.skills.iter()))
            .filter(|skill| seen.insert(normalize_skill(skill)))
            .cloned()
            .collect()
    }
}

fn check_skills(owner: &str, skills: &[String]) -> Result<(), CatalogError> {
    if skills.is_empty() {
        return Err(CatalogError::Invalid(format!(
            "{owner} must list at least one skill"
        )));
    }
    if skills.iter().any(|s| s.trim().is_empty()) {
        return Err(CatalogError::Invalid(format!(
            "{owner} contains an empty skill"
        )));
    }
    Ok(())
}

/// Trims entries and drops blanks, as when skills are typed as a comma list.
pub fn clean_skill_list(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_duplicate_industry_names_are_rejected_case_insensitively() {
        let catalog = Catalog {
            industries: vec![
                Industry::new("Data Scientist", &["Python"]),
                Industry::new(" data scientist ", &["R"]),
            ],
            courses: vec![],
        };
        assert!(matches!(catalog.validate(), Err(CatalogError::Duplicate(_))));
    }

    #[test]
    fn test_duplicate_course_codes_are_rejected() {
        let catalog = Catalog {
            industries: vec![],
            courses: vec![
                Course::new("CS101", "Intro", &["Algorithms"]),
                Course::new("cs101", "Intro again", &["Algorithms"]),
            ],
        };
        assert!(matches!(catalog.validate(), Err(CatalogError::Duplicate(_))));
    }

    #[test]
    fn test_industry_without_skills_is_invalid() {
        let catalog = Catalog {
            industries: vec![Industry::new("Empty", &[])],
            courses: vec![],
        };
        assert!(matches!(catalog.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_blank_skill_is_invalid() {
        let catalog = Catalog {
            industries: vec![],
            courses: vec![Course::new("X1", "Course", &["SQL", "  "])],
        };
        assert!(matches!(catalog.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_skill_vocabulary_dedupes_by_normalized_key() {
        let catalog = Catalog {
            industries: vec![Industry::new("Web", &["React", "Node.js"])],
            courses: vec![Course::new("W1", "Web", &["ReactJS", "CSS", "nodejs"])],
        };
        assert_eq!(
            catalog.skill_vocabulary(),
            vec!["React".to_string(), "Node.js".to_string(), "CSS".to_string()]
        );
    }

    #[test]
    fn test_clean_skill_list() {
        let raw = vec![" SQL ".to_string(), "".to_string(), "  ".to_string(), "R".to_string()];
        assert_eq!(clean_skill_list(&raw), vec!["SQL".to_string(), "R".to_string()]);
    }

    #[test]
    fn test_from_json_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "industries": [{{ "name": "Data Engineer", "skills": ["SQL", "Spark"] }}],
                "courses": [{{ "code": "DE101", "name": "Pipelines", "skills": ["Spark"] }}]
            }}"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.industries[0].name, "Data Engineer");
        assert_eq!(catalog.courses[0].code, "DE101");
    }

    #[test]
    fn test_from_json_file_rejects_invalid_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "industries": [{{ "name": "Empty", "skills": [] }}], "courses": [] }}"#)
            .unwrap();
        assert!(matches!(
            Catalog::from_json_file(file.path()),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn test_from_json_file_missing_file() {
        assert!(matches!(
            Catalog::from_json_file("/definitely/not/here.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
