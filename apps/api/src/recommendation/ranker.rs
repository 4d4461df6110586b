//! Recommendation Ranker: runs matching, scoring and course selection for every
//! industry, then orders the results.

use tracing::debug;

use crate::models::catalog::{Course, Industry};
use crate::models::recommendation::Recommendation;
use crate::recommendation::courses::recommend_courses;
use crate::recommendation::matcher::{partition_skills, UserSkillSet};
use crate::recommendation::scorer::match_percentage;

/// Builds one recommendation per industry, sorted by match percentage descending.
///
/// The sort is stable: equal scores keep catalog order. The full list is returned.
/// Pure over its inputs, so concurrent callers need no coordination.
pub fn recommend<S: AsRef<str>>(
    user_skills: &[S],
    industries: &[Industry],
    courses: &[Course],
) -> Vec<Recommendation> {
    let user = UserSkillSet::new(user_skills);

    debug!(
        user_skills = user_skills.len(),
        distinct_keys = user.len(),
        industries = industries.len(),
        courses = courses.len(),
        "Computing career recommendations"
    );

    let mut recommendations: Vec<Recommendation> = industries
        .iter()
        .map(|industry| recommend_industry(&user, industry, courses))
        .collect();

    recommendations.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    recommendations
}

fn recommend_industry(user: &UserSkillSet, industry: &Industry, courses: &[Course]) -> Recommendation {
    let partition = partition_skills(user, &industry.skills);
    let match_percentage = match_percentage(partition.existing.len(), partition.total());
    let recommended_courses = recommend_courses(&partition.missing, courses);

    Recommendation {
        role: industry.name.clone(),
        match_percentage,
        existing_skills: partition.existing,
        missing_skills: partition.missing,
        recommended_courses,
    }
}
