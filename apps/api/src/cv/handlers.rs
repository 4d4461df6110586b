//! Axum route handlers for CV skill extraction.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::cv::{fallback_skills, CvDocument, ExtractError};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CvSkillsResponse {
    pub skills: Vec<String>,
    /// True when `skills` is the fixed fallback list rather than extracted.
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub extractor: &'static str,
}

/// POST /api/v1/cv/skills
///
/// Multipart upload with a `cv` file field. Returns the extracted skill labels,
/// ready to be sent to the recommendation endpoint.
pub async fn handle_extract_cv_skills(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CvSkillsResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("cv") {
            let file_name = field.file_name().unwrap_or("cv.txt").to_string();
            let bytes = field.bytes().await.map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(format!("CV upload exceeds the size limit: {e}"))
                } else {
                    AppError::Validation(format!("Failed to read CV upload: {e}"))
                }
            })?;
            upload = Some((file_name, bytes));
            break;
        }
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| AppError::Validation("CV file is required".to_string()))?;

    let document = CvDocument::new(&file_name, bytes, state.config.max_upload_bytes)?;
    let vocabulary = state.catalog.snapshot().skill_vocabulary();
    let extractor = state.skill_extractor.name();

    match state.skill_extractor.extract(&document, &vocabulary).await {
        Ok(skills) => {
            info!(
                file = %document.file_name,
                bytes = document.len(),
                extractor,
                skills = skills.len(),
                "CV skills extracted"
            );
            Ok(Json(CvSkillsResponse {
                skills,
                fallback: false,
                warning: None,
                extractor,
            }))
        }
        Err(e) => fallback_or_error(e, state.config.cv_fallback_enabled, extractor),
    }
}

fn fallback_or_error(
    err: ExtractError,
    fallback_enabled: bool,
    extractor: &'static str,
) -> Result<Json<CvSkillsResponse>, AppError> {
    if err.is_client_error() || !fallback_enabled {
        return Err(err.into());
    }

    warn!("CV extraction failed, using fallback skills: {err}");
    Ok(Json(CvSkillsResponse {
        skills: fallback_skills(),
        fallback: true,
        warning: Some(format!(
            "Failed to process your CV ({err}). Showing default skills; edit them or enter skills manually."
        )),
        extractor,
    }))
}
