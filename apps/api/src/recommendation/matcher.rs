//! Matcher: partitions an industry's required skills into held and missing.

use std::collections::HashSet;

use crate::recommendation::normalizer::normalize_skill;

/// Normalized keys of everything the user listed. Built once per request.
#[derive(Debug, Clone, Default)]
pub struct UserSkillSet {
    keys: HashSet<String>,
}

impl UserSkillSet {
    pub fn new<S: AsRef<str>>(raw_skills: &[S]) -> Self {
        Self {
            keys: raw_skills
                .iter()
                .map(|s| normalize_skill(s.as_ref()))
                .collect(),
        }
    }

    /// Exact key equality. No partial or fuzzy matching.
    pub fn has(&self, raw_skill: &str) -> bool {
        self.keys.contains(&normalize_skill(raw_skill))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Result of matching one industry. Both lists keep catalog order and catalog casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPartition {
    pub existing: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillPartition {
    pub fn total(&self) -> usize {
        self.existing.len() + self.missing.len()
    }
}

pub fn partition_skills(user: &UserSkillSet, required: &[String]) -> SkillPartition {
    let mut partition = SkillPartition::default();

    for skill in required {
        if user.has(skill) {
            partition.existing.push(skill.clone());
        } else {
            partition.missing.push(skill.clone());
        }
    }

    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn software_developer() -> Vec<String> {
        strings(&[
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Git",
            "Problem Solving",
            "Data Structures",
            "Algorithms",
            "API Design",
            "Testing",
        ])
    }

    #[test]
    fn test_partition_keeps_catalog_order_and_casing() {
        let user = UserSkillSet::new(&["git", "REACT", "javascript"]);
        let partition = partition_skills(&user, &software_developer());

        assert_eq!(partition.existing, strings(&["JavaScript", "React", "Git"]));
        assert_eq!(
            partition.missing,
            strings(&[
                "TypeScript",
                "Node.js",
                "Problem Solving",
                "Data Structures",
                "Algorithms",
                "API Design",
                "Testing",
            ])
        );
    }

    #[test]
    fn test_synonym_match_uses_catalog_text() {
        let user = UserSkillSet::new(&["react.js"]);
        let partition = partition_skills(&user, &strings(&["React"]));
        assert_eq!(partition.existing, strings(&["React"]));
        assert!(partition.missing.is_empty());
    }

    #[test]
    fn test_no_substring_matching() {
        let user = UserSkillSet::new(&["Java"]);
        let partition = partition_skills(&user, &strings(&["JavaScript"]));
        assert!(partition.existing.is_empty());
        assert_eq!(partition.missing, strings(&["JavaScript"]));
    }

    #[test]
    fn test_empty_user_skills_everything_missing() {
        let user = UserSkillSet::new::<&str>(&[]);
        let required = software_developer();
        let partition = partition_skills(&user, &required);
        assert!(partition.existing.is_empty());
        assert_eq!(partition.missing, required);
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let user = UserSkillSet::new(&["Git", "testing", "Cooking", "API-design"]);
        let required = software_developer();
        let partition = partition_skills(&user, &required);

        assert_eq!(partition.total(), required.len());
        for skill in &required {
            let in_existing = partition.existing.contains(skill);
            let in_missing = partition.missing.contains(skill);
            assert!(in_existing ^ in_missing, "{skill} must be in exactly one list");
        }
    }

    #[test]
    fn test_duplicate_required_skills_are_kept() {
        let user = UserSkillSet::new(&["SQL"]);
        let partition = partition_skills(&user, &strings(&["SQL", "sql", "Python"]));
        assert_eq!(partition.existing, strings(&["SQL", "sql"]));
        assert_eq!(partition.missing, strings(&["Python"]));
    }

    #[test]
    fn test_punctuation_only_skills_share_the_empty_key() {
        let user = UserSkillSet::new(&["!!"]);
        assert!(user.has("..."));
        assert!(!user.has("Git"));
        assert_eq!(user.len(), 1);
    }
}
