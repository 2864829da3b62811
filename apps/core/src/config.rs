//! Runtime configuration.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file). Command-line flags override them in `main`.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::nlp::keywords::DEFAULT_TOP_N;

pub const ENV_OUTPUT_DIR: &str = "CLOGEN_OUTPUT_DIR";
pub const ENV_TOP_KEYWORDS: &str = "CLOGEN_TOP_KEYWORDS";
pub const ENV_STOPWORDS_FILE: &str = "CLOGEN_STOPWORDS_FILE";
pub const ENV_SEED: &str = "CLOGEN_SEED";
pub const ENV_LOG_FORMAT: &str = "CLOGEN_LOG_FORMAT";

const DEFAULT_OUTPUT_DIR: &str = "output";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Directory receiving CSV and text exports
    pub output_dir: PathBuf,
    /// Number of keywords kept from the frequency ranking
    #[validate(range(min = 1, max = 500))]
    pub top_keywords: usize,
    /// Optional newline-separated stopword list replacing the built-in one
    pub stopwords_file: Option<PathBuf>,
    /// Fixed seed for reproducible generation
    pub seed: Option<u64>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            top_keywords: DEFAULT_TOP_N,
            stopwords_file: None,
            seed: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read the environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            output_dir: var(ENV_OUTPUT_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            top_keywords: parse_var(ENV_TOP_KEYWORDS)?.unwrap_or(defaults.top_keywords),
            stopwords_file: var(ENV_STOPWORDS_FILE).map(PathBuf::from),
            seed: parse_var(ENV_SEED)?,
            log_format: parse_var(ENV_LOG_FORMAT)?.unwrap_or(defaults.log_format),
        };

        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;
        Ok(config)
    }
}

/// Non-empty environment variable
fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    var(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| AppError::Config(format!("{} has invalid value '{}': {}", key, raw, e)))
        })
        .transpose()
}
