//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use flashcard_core::pacing::DEFAULT_INTERVAL;
use flashcard_core::translate::DEFAULT_TARGET_LANGUAGE;
use thiserror::Error;

pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";
pub const API_URL_VAR: &str = "DEEPSEEK_API_URL";
pub const MODEL_VAR: &str = "DEEPSEEK_MODEL";
pub const DELAY_VAR: &str = "MD_TO_ANKI_DELAY_MS";
pub const TARGET_LANGUAGE_VAR: &str = "MD_TO_ANKI_TARGET_LANGUAGE";

pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Errors that stop a run before any extraction happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set (e.g. export {0}=your_api_key_here)")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),
}

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    /// Minimum pause between backend calls.
    pub delay: Duration,
    pub target_language: String,
}

impl Config {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let delay = match non_empty(DELAY_VAR) {
            Some(value) => {
                let millis = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidVar {
                        name: DELAY_VAR,
                        value: value.clone(),
                        reason: e.to_string(),
                    })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_INTERVAL,
        };

        Ok(Self {
            api_key: api_key.trim().to_string(),
            api_url: non_empty(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            delay,
            target_language: non_empty(TARGET_LANGUAGE_VAR)
                .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string()),
        })
    }
}
