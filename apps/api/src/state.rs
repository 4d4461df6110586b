use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::cv::SkillExtractor;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Published industry/course catalog. Handlers take a snapshot per request.
    pub catalog: CatalogStore,
    /// Pluggable CV skill extractor. Default: LlmSkillExtractor when an API key is set.
    pub skill_extractor: Arc<dyn SkillExtractor>,
    /// `None` when no API key is configured; LLM-backed routes answer 503.
    pub llm: Option<LlmClient>,
}
