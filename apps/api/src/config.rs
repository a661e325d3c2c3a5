use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Most settings are optional because the service degrades
/// feature-by-feature: no `REDIS_URL` means file-backed storage, no
/// `SHEET_APP_URL` means spreadsheet logging is skipped, no
/// `OPENAI_API_KEY` means the key must come from the settings slot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback OpenAI API key. A key saved through the settings endpoint
    /// takes precedence over this one.
    pub openai_api_key: Option<String>,
    /// When set, CV/key storage uses Redis (the synchronized area).
    pub redis_url: Option<String>,
    /// Directory for the file-backed storage fallback.
    pub data_dir: String,
    /// Directory holding the prompt template files.
    pub prompts_dir: String,
    /// Spreadsheet web-app endpoint for job logging.
    pub sheet_app_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            redis_url: optional_env("REDIS_URL"),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            prompts_dir: std::env::var("PROMPTS_DIR").unwrap_or_else(|_| "prompts".to_string()),
            sheet_app_url: optional_env("SHEET_APP_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Returns `None` for unset OR empty variables, so `FOO=` in a .env file
/// behaves the same as no variable at all.
fn optional_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
