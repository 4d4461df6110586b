pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{catalog, cv, job_market, recommendation, roadmap};

/// Multipart framing on top of the raw file bytes.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation engine
        .route(
            "/api/recommend",
            post(recommendation::handlers::handle_recommend),
        )
        .route(
            "/api/v1/recommendations",
            post(recommendation::handlers::handle_recommend),
        )
        // CV extraction
        .route(
            "/api/v1/cv/skills",
            post(cv::handlers::handle_extract_cv_skills),
        )
        // Catalog admin
        .route("/api/v1/catalog", get(catalog::handlers::handle_get_catalog))
        .route(
            "/api/v1/catalog/industries",
            post(catalog::handlers::handle_add_industry),
        )
        .route(
            "/api/v1/catalog/courses",
            post(catalog::handlers::handle_add_course),
        )
        // Supporting data
        .route(
            "/api/v1/job-market",
            get(job_market::handlers::handle_job_market),
        )
        .route(
            "/api/v1/roadmap",
            post(roadmap::handlers::handle_generate_roadmap),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
