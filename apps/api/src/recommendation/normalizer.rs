//! Skill Normalizer: turns a raw skill label into the key used for every comparison.
//!
//! `normalize_skill` lowercases, drops everything outside `[a-z0-9]`, then resolves
//! the stripped form through `SKILL_SYNONYMS`. Two skills are the same skill iff their
//! keys are equal. Display text is never derived from a key.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Stripped variant → canonical key.
///
/// Both sides are already in stripped form, and every canonical key is a fixed point
/// (never itself a left-hand side), which keeps `normalize_skill` idempotent.
/// New rows can be appended freely.
pub const SKILL_SYNONYMS: &[(&str, &str)] = &[
    ("reactjs", "react"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("golang", "go"),
    ("amazonwebservices", "aws"),
    ("postgres", "postgresql"),
    ("k8s", "kubernetes"),
    ("ml", "machinelearning"),
    ("seooptimization", "seo"),
    ("searchengineoptimization", "seo"),
    ("searchenginemarketing", "sem"),
    ("userexperience", "ux"),
    ("uxdesign", "ux"),
];

static SYNONYM_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SKILL_SYNONYMS.iter().copied().collect());

/// Canonical comparison key for a raw skill string.
///
/// Empty or punctuation-only input yields `""`; all such inputs compare equal.
pub fn normalize_skill(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    match SYNONYM_INDEX.get(stripped.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => stripped,
    }
}
