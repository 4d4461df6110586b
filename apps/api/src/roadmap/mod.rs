//! Career roadmap generation via the LLM client.

pub mod handlers;
pub mod prompts;

use crate::llm_client::{CallOptions, LlmClient, LlmError};
use crate::roadmap::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};

pub fn build_roadmap_prompt(skills: &[String], experience: Option<&str>, role: Option<&str>) -> String {
    let role = role.map(str::trim).filter(|r| !r.is_empty()).unwrap_or("professional");
    let experience = experience
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(|e| format!("Current experience: {e}"))
        .unwrap_or_default();

    ROADMAP_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{skills}", &skills.join(", "))
        .replace("{experience}", &experience)
}

pub async fn generate_roadmap(
    llm: &LlmClient,
    skills: &[String],
    experience: Option<&str>,
    role: Option<&str>,
) -> Result<String, LlmError> {
    let prompt = build_roadmap_prompt(skills, experience, role);
    llm.call_text(
        &prompt,
        ROADMAP_SYSTEM,
        CallOptions {
            max_tokens: 1500,
            temperature: 0.7,
        },
    )
    .await
}
