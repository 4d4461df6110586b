//! Course Recommender: catalog courses that teach at least one missing skill.

use std::collections::HashSet;

use crate::models::catalog::Course;
use crate::models::recommendation::CourseRef;
use crate::recommendation::normalizer::normalize_skill;

/// Returns every qualifying course once, in catalog order.
///
/// A course qualifies iff one of its skills normalizes to the same key as one of
/// `missing`. Nothing is ranked by overlap size.
pub fn recommend_courses(missing: &[String], courses: &[Course]) -> Vec<CourseRef> {
    if missing.is_empty() {
        return Vec::new();
    }

    let missing_keys: HashSet<String> = missing.iter().map(|s| normalize_skill(s)).collect();

    courses
        .iter()
        .filter(|course| {
            course
                .skills
                .iter()
                .any(|skill| missing_keys.contains(&normalize_skill(skill)))
        })
        .map(|course| CourseRef {
            code: course.code.clone(),
            name: course.name.clone(),
        })
        .collect()
}
