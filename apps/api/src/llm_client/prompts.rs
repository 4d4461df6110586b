// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to prompts whose reply is parsed as a comma-separated list.
pub const COMMA_LIST_ONLY: &str = "Return only a comma-separated list with no additional commentary, \
    numbering, headings, or trailing punctuation.";
