//! Axum route handlers for the Catalog admin API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{clean_skill_list, Catalog};
use crate::errors::AppError;
use crate::models::catalog::{Course, Industry};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddIndustryRequest {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddCourseRequest {
    pub code: String,
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CatalogCounts {
    pub industries: usize,
    pub courses: usize,
}

#[derive(Debug, Serialize)]
pub struct IndustryCreatedResponse {
    pub industry: Industry,
    pub catalog: CatalogCounts,
}

#[derive(Debug, Serialize)]
pub struct CourseCreatedResponse {
    pub course: Course,
    pub catalog: CatalogCounts,
}

fn counts(catalog: &Catalog) -> CatalogCounts {
    CatalogCounts {
        industries: catalog.industries.len(),
        courses: catalog.courses.len(),
    }
}

/// GET /api/v1/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(Catalog::clone(&state.catalog.snapshot()))
}

/// POST /api/v1/catalog/industries
pub async fn handle_add_industry(
    State(state): State<AppState>,
    body: Result<Json<AddIndustryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IndustryCreatedResponse>), AppError> {
    let Json(req) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let industry = Industry {
        name: req.name.trim().to_string(),
        skills: clean_skill_list(&req.skills),
    };

    let published = state.catalog.add_industry(industry.clone())?;

    Ok((
        StatusCode::CREATED,
        Json(IndustryCreatedResponse {
            industry,
            catalog: counts(&published),
        }),
    ))
}

/// POST /api/v1/catalog/courses
pub async fn handle_add_course(
    State(state): State<AppState>,
    body: Result<Json<AddCourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseCreatedResponse>), AppError> {
    let Json(req) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let course = Course {
        code: req.code.trim().to_string(),
        name: req.name.trim().to_string(),
        skills: clean_skill_list(&req.skills),
    };

    let published = state.catalog.add_course(course.clone())?;

    Ok((
        StatusCode::CREATED,
        Json(CourseCreatedResponse {
            course,
            catalog: counts(&published),
        }),
    ))
}
