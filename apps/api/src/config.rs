use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Enables the LLM enhancement adapter when present.
    pub anthropic_api_key: Option<String>,
    pub enhancement_timeout: Duration,
    pub generation_concurrency: usize,
    pub max_batch_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_concurrency = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        Ok(Config {
            port: parse_or("PORT", std::env::var("PORT").ok(), 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            enhancement_timeout: Duration::from_secs(parse_or(
                "ENHANCEMENT_TIMEOUT_SECS",
                std::env::var("ENHANCEMENT_TIMEOUT_SECS").ok(),
                30,
            )?),
            generation_concurrency: parse_or(
                "GENERATION_CONCURRENCY",
                std::env::var("GENERATION_CONCURRENCY").ok(),
                default_concurrency,
            )?
            .max(1),
            max_batch_size: parse_or("MAX_BATCH_SIZE", std::env::var("MAX_BATCH_SIZE").ok(), 500)?,
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{value}'")),
        None => Ok(default),
    }
}
