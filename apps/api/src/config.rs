use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which text-generation backend the gateway talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LlmProvider {
    #[default]
    Claude,
    OpenAi,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Claude => "claude",
            LlmProvider::OpenAi => "openai",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "claude" | "anthropic" => Ok(LlmProvider::Claude),
            "openai" => Ok(LlmProvider::OpenAi),
            other => Err(anyhow!("Unsupported model provider: {other}")),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// Credentials stay optional here; the gateway constructor rejects a missing
/// key for the selected provider, so startup still fails fast.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_provider: LlmProvider,
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_model: Option<String>,
    pub openai_model: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Seconds a workflow session may sit idle before it is dropped.
    pub session_ttl_secs: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_provider: optional_env("LLM_PROVIDER")
                .map(|p| p.parse::<LlmProvider>())
                .transpose()
                .context("LLM_PROVIDER must be 'claude' or 'openai'")?
                .unwrap_or_default(),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            anthropic_model: optional_env("ANTHROPIC_MODEL"),
            openai_model: optional_env("OPENAI_MODEL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .unwrap_or_else(|_| "7200".to_string())
                .parse::<u32>()
                .context("SESSION_TTL_SECS must be a whole number of seconds")?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
