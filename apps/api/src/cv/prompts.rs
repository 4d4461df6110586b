pub const SKILL_EXTRACTION_SYSTEM: &str = "You extract professional skills from CVs. \
    Extract all professional skills from the text provided.";

/// Placeholder: `{cv_text}`.
pub const SKILL_EXTRACTION_PROMPT: &str = "Extract all professional skills from this CV:\n\n{cv_text}";
