use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::clean_skill_list;
use crate::errors::AppError;
use crate::roadmap::generate_roadmap;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: String,
}

/// POST /api/v1/roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    body: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let Json(request) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let skills = clean_skill_list(&request.skills);
    if skills.is_empty() {
        return Err(AppError::Validation(
            "Skills are required to generate a roadmap".to_string(),
        ));
    }

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Unavailable("Roadmap generation requires OPENAI_API_KEY".to_string())
    })?;

    let roadmap = generate_roadmap(
        llm,
        &skills,
        request.experience.as_deref(),
        request.role.as_deref(),
    )
    .await?;

    info!(role = request.role.as_deref().unwrap_or("professional"), "Roadmap generated");
    Ok(Json(RoadmapResponse { roadmap }))
}
