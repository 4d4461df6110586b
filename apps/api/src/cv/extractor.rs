use async_trait::async_trait;
use tracing::debug;

use crate::cv::prompts::{SKILL_EXTRACTION_PROMPT, SKILL_EXTRACTION_SYSTEM};
use crate::cv::{parse_skill_list, CvDocument, ExtractError, SkillExtractor};
use crate::llm_client::prompts::COMMA_LIST_ONLY;
use crate::llm_client::{CallOptions, LlmClient};

/// CV text beyond this many characters is not sent to the model.
const MAX_PROMPT_CHARS: usize = 24_000;

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillExtractor: vocabulary scan, no network
// ────────────────────────────────────────────────────────────────────────────

/// Finds catalog skills mentioned verbatim in the CV text.
///
/// Matching is case-insensitive and needs a non-alphanumeric character (or the
/// start/end of text) on both sides, so "Java" is not found inside "JavaScript".
/// Results follow vocabulary order.
pub struct KeywordSkillExtractor;

#[async_trait]
impl SkillExtractor for KeywordSkillExtractor {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn extract(
        &self,
        document: &CvDocument,
        vocabulary: &[String],
    ) -> Result<Vec<String>, ExtractError> {
        if vocabulary.is_empty() {
            return Err(ExtractError::Unavailable(
                "catalog has no skills to scan for".to_string(),
            ));
        }

        let text = document.text().await?;
        let found = scan_for_skills(&text, vocabulary);
        debug!(
            file = %document.file_name,
            found = found.len(),
            vocabulary = vocabulary.len(),
            "Keyword skill scan finished"
        );
        Ok(found)
    }
}

pub fn scan_for_skills(text: &str, vocabulary: &[String]) -> Vec<String> {
    let haystack = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|skill| contains_phrase(&haystack, &skill.trim().to_lowercase()))
        .cloned()
        .collect()
}

fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    haystack.match_indices(phrase).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillExtractor: chat model returns a comma-separated list
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSkillExtractor(pub LlmClient);

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn extract(
        &self,
        document: &CvDocument,
        _vocabulary: &[String],
    ) -> Result<Vec<String>, ExtractError> {
        let text = document.text().await?;
        if text.trim().is_empty() {
            return Err(ExtractError::Document("no readable text in CV".to_string()));
        }

        let prompt = build_extraction_prompt(&text);
        let system = format!("{SKILL_EXTRACTION_SYSTEM} {COMMA_LIST_ONLY}");
        let reply = self
            .0
            .call_text(
                &prompt,
                &system,
                CallOptions {
                    max_tokens: 500,
                    temperature: 0.3,
                },
            )
            .await?;

        let skills = parse_skill_list(&reply);
        debug!(file = %document.file_name, found = skills.len(), "LLM skill extraction finished");
        Ok(skills)
    }
}

fn build_extraction_prompt(cv_text: &str) -> String {
    let clipped: String = cv_text.chars().take(MAX_PROMPT_CHARS).collect();
    SKILL_EXTRACTION_PROMPT.replace("{cv_text}", clipped.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn vocab(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let found = scan_for_skills("Built APIs in PYTHON and sql", &vocab(&["Python", "SQL", "Rust"]));
        assert_eq!(found, vocab(&["Python", "SQL"]));
    }

    #[test]
    fn test_scan_respects_word_boundaries() {
        let found = scan_for_skills("Five years of JavaScript.", &vocab(&["Java", "JavaScript"]));
        assert_eq!(found, vocab(&["JavaScript"]));
    }

    #[test]
    fn test_scan_finds_punctuated_and_multi_word_skills() {
        let text = "Skills: Node.js, A/B Testing; Machine Learning (scikit-learn)";
        let found = scan_for_skills(text, &vocab(&["Node.js", "A/B Testing", "Machine Learning", "Testing"]));
        assert_eq!(found, vocab(&["Node.js", "A/B Testing", "Machine Learning", "Testing"]));
    }

    #[test]
    fn test_scan_single_letter_skill_needs_boundaries() {
        assert!(scan_for_skills("Rust and Ruby", &vocab(&["R"])).is_empty());
        assert_eq!(scan_for_skills("Python, R, SQL", &vocab(&["R"])), vocab(&["R"]));
    }

    #[test]
    fn test_scan_later_occurrence_can_match() {
        // First "git" is inside "digit", the second stands alone.
        assert_eq!(scan_for_skills("digit tracking with git", &vocab(&["Git"])), vocab(&["Git"]));
    }

    #[test]
    fn test_extraction_prompt_clips_long_text() {
        let long = "x".repeat(MAX_PROMPT_CHARS + 100);
        let prompt = build_extraction_prompt(&long);
        assert!(prompt.len() < MAX_PROMPT_CHARS + 100);
        assert!(prompt.starts_with("Extract all professional skills from this CV:"));
    }

    #[tokio::test]
    async fn test_keyword_extractor_reads_text_documents() {
        let doc = CvDocument::new(
            "cv.txt",
            Bytes::from_static(b"Experienced with Figma, prototyping and user research."),
            1024,
        )
        .unwrap();
        let found = KeywordSkillExtractor
            .extract(&doc, &vocab(&["User Research", "Figma", "Prototyping", "SEO"]))
            .await
            .unwrap();
        assert_eq!(found, vocab(&["User Research", "Figma", "Prototyping"]));
        assert_eq!(KeywordSkillExtractor.name(), "keyword");
    }

    #[tokio::test]
    async fn test_keyword_extractor_needs_a_vocabulary() {
        let doc = CvDocument::new("cv.txt", Bytes::from_static(b"Rust"), 1024).unwrap();
        assert!(matches!(
            KeywordSkillExtractor.extract(&doc, &[]).await,
            Err(ExtractError::Unavailable(_))
        ));
    }
}
