use anyhow::{bail, Context, Result};

/// Default CV upload ceiling: 5 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Which backend turns CV text into a skill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    /// Chat-completions model. Needs `OPENAI_API_KEY`.
    Llm,
    /// Catalog vocabulary scan, no network.
    Keyword,
}

/// Application configuration loaded from environment variables.
/// Startup fails if a provided value cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai_api_key: Option<String>,
    pub skill_extractor: ExtractorKind,
    pub max_upload_bytes: usize,
    pub catalog_path: Option<String>,
    pub cv_fallback_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty());

        let skill_extractor = match lookup("SKILL_EXTRACTOR").as_deref().map(str::trim) {
            None | Some("") => {
                if openai_api_key.is_some() {
                    ExtractorKind::Llm
                } else {
                    ExtractorKind::Keyword
                }
            }
            Some(v) if v.eq_ignore_ascii_case("llm") => ExtractorKind::Llm,
            Some(v) if v.eq_ignore_ascii_case("keyword") => ExtractorKind::Keyword,
            Some(other) => bail!("SKILL_EXTRACTOR must be 'llm' or 'keyword', got '{other}'"),
        };

        if skill_extractor == ExtractorKind::Llm && openai_api_key.is_none() {
            bail!("SKILL_EXTRACTOR=llm requires OPENAI_API_KEY to be set");
        }

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            openai_api_key,
            skill_extractor,
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            catalog_path: lookup("CATALOG_PATH").filter(|p| !p.trim().is_empty()),
            cv_fallback_enabled: match lookup("CV_FALLBACK_ENABLED") {
                Some(v) => parse_bool(&v).context("CV_FALLBACK_ENABLED must be true or false")?,
                None => true,
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}
