use serde::{Deserialize, Serialize};

/// Course reference attached to a recommendation. Only code and title are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRef {
    pub code: String,
    pub name: String,
}

/// One ranked career suggestion. Field names follow the public JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub role: String,
    pub match_percentage: u8,
    pub existing_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommended_courses: Vec<CourseRef>,
}
