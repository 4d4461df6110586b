mod catalog;
mod config;
mod cv;
mod errors;
mod job_market;
mod llm_client;
mod models;
mod recommendation;
mod roadmap;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{seed::builtin_catalog, Catalog, CatalogStore};
use crate::config::{Config, ExtractorKind};
use crate::cv::{KeywordSkillExtractor, LlmSkillExtractor, SkillExtractor};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Load catalog (built-in unless CATALOG_PATH is set)
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from '{path}'"))?,
        None => builtin_catalog(),
    };
    info!(
        "Catalog loaded: {} industries, {} courses",
        catalog.industries.len(),
        catalog.courses.len()
    );

    // Initialize LLM client (optional)
    let llm = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(client)
        }
        None => {
            info!("No OPENAI_API_KEY set; LLM-backed features disabled");
            None
        }
    };

    // Initialize skill extractor (LlmSkillExtractor when a key is set; SKILL_EXTRACTOR overrides)
    let skill_extractor: Arc<dyn SkillExtractor> = match (config.skill_extractor, &llm) {
        (ExtractorKind::Llm, Some(client)) => Arc::new(LlmSkillExtractor(client.clone())),
        _ => Arc::new(KeywordSkillExtractor),
    };
    info!(
        "Skill extractor: {} (upload limit {} bytes, fallback {})",
        skill_extractor.name(),
        config.max_upload_bytes,
        config.cv_fallback_enabled
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog: CatalogStore::new(catalog),
        skill_extractor,
        llm,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the dashboard origin once it is configurable

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
