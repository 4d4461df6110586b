//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::recommendation::Recommendation;
use crate::recommendation::recommend;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

/// POST /api/recommend (also /api/v1/recommendations)
///
/// Body `{ "skills": string[] }`. Runs the engine against the current catalog snapshot.
pub async fn handle_recommend(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(body) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let skills = parse_skills_field(&body)?;

    let catalog = state.catalog.snapshot();
    let recommendations = recommend(&skills, &catalog.industries, &catalog.courses);

    info!(
        skills = skills.len(),
        top_role = recommendations.first().map(|r| r.role.as_str()).unwrap_or("-"),
        "Recommendations computed"
    );

    Ok(Json(RecommendResponse { recommendations }))
}

/// Pulls `skills` out of a request body.
///
/// The field must be present and an array of strings. Non-string entries are
/// rejected rather than coerced.
pub fn parse_skills_field(body: &Value) -> Result<Vec<String>, AppError> {
    let items = body
        .get("skills")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Validation("Skills must be provided as an array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                AppError::Validation(format!("skills[{i}] must be a string, got {item}"))
            })
        })
        .collect()
}
