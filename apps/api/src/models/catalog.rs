use serde::{Deserialize, Serialize};

/// A career role and the skills it requires, in display casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub name: String,
    pub skills: Vec<String>,
}

/// A university course and the skills it teaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub skills: Vec<String>,
}

impl Industry {
    pub fn new(name: &str, skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Course {
    pub fn new(code: &str, name: &str, skills: &[&str]) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}
