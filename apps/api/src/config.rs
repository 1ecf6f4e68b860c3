use anyhow::{Context, Result};

const DEFAULT_LLM_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LLM_MAX_CONCURRENCY: usize = 4;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_api_key: String,
    /// Budget for a single per-criterion LLM call, in seconds.
    pub llm_timeout_secs: u64,
    /// Maximum concurrent calls against the LLM endpoint per assessment.
    pub llm_max_concurrency: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_api_url: require_env("LLM_API_URL")?,
            llm_model: require_env("LLM_MODEL")?,
            llm_api_key: require_env("LLM_API_KEY")?,
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_LLM_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a positive integer")?,
            llm_max_concurrency: std::env::var("LLM_MAX_CONCURRENCY")
                .unwrap_or_else(|_| DEFAULT_LLM_MAX_CONCURRENCY.to_string())
                .parse::<usize>()
                .context("LLM_MAX_CONCURRENCY must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
