//! CV Extractor: turns an uploaded CV into a flat list of skill labels.
//!
//! Lives outside the engine: the engine only ever sees the resulting `Vec<String>`,
//! whether it came from a CV, manual entry, or the fallback list.
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`, chosen at startup via config.

pub mod document;
pub mod extractor;
pub mod handlers;
pub mod prompts;

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::recommendation::normalizer::normalize_skill;

pub use document::CvDocument;
pub use extractor::{KeywordSkillExtractor, LlmSkillExtractor};

/// Used in place of extracted skills when extraction fails and fallback is enabled.
pub const FALLBACK_SKILLS: &[&str] = &["Communication", "Problem Solving", "Teamwork"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("CV file is empty")]
    Empty,

    #[error("CV file is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    #[error("Unsupported CV format '{0}'; upload a PDF or plain-text file")]
    UnsupportedFormat(String),

    #[error("Could not read CV: {0}")]
    Document(String),

    #[error("Skill extraction unavailable: {0}")]
    Unavailable(String),

    #[error("Skill extraction failed: {0}")]
    Llm(#[from] LlmError),
}

impl ExtractError {
    /// Errors caused by the upload itself. These are reported, never papered over
    /// with the fallback list.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractError::Empty | ExtractError::TooLarge { .. } | ExtractError::UnsupportedFormat(_)
        )
    }
}

/// Pluggable skill extraction backend.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    /// Backend label reported to callers ("keyword" | "llm").
    fn name(&self) -> &'static str;

    /// `vocabulary` is the current catalog's distinct skill labels.
    async fn extract(
        &self,
        document: &CvDocument,
        vocabulary: &[String],
    ) -> Result<Vec<String>, ExtractError>;
}

/// Splits a comma-separated model reply into skills.
///
/// Entries are trimmed, blanks dropped, and later entries with the same normalized
/// key as an earlier one are discarded.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split([',', '\n'])
        .map(|s| s.trim().trim_start_matches(['-', '*', '•']).trim())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(normalize_skill(s)))
        .map(str::to_string)
        .collect()
}

pub fn fallback_skills() -> Vec<String> {
    FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect()
}
