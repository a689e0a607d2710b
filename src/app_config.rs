use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Tone register for the translated output
    #[serde(default)]
    pub tone: Tone,

    /// Terms that must be carried into the output verbatim
    #[serde(default)]
    pub glossary: Vec<String>,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Tone register requested for the Tagalog output
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    // @tone: Polite, formal register
    Formal,
    // @tone: Natural register for a general readership
    #[default]
    Informal,
}

impl Tone {
    // @returns: Capitalized tone name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Formal => "Formal",
            Self::Informal => "Informal",
        }
    }

    // @returns: Lowercase tone identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Formal => "formal".to_string(),
            Self::Informal => "informal".to_string(),
        }
    }
}

// Implement Display trait for Tone
impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for Tone
impl std::str::FromStr for Tone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "formal" => Ok(Self::Formal),
            "informal" => Ok(Self::Informal),
            _ => Err(anyhow!("Invalid tone: {}", s)),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Model name (e.g., "gpt-4.1-mini")
    #[serde(default = "default_model")]
    pub model: String,

    /// Service endpoint URL (optional, for Azure OpenAI or self-hosted)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Maximum words packed into a single request
    #[serde(default = "default_max_words_per_chunk")]
    pub max_words_per_chunk: usize,

    /// Maximum number of concurrent requests
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry count for failed requests
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Backoff multiplier for retries (in milliseconds)
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Environment variable consulted when the config carries no API key
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_max_words_per_chunk() -> usize {
    4000
}

fn default_concurrent_requests() -> usize {
    1 // Sequential unless the user opts into parallelism
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_retry_count() -> u32 {
    2 // Default to 2 retries
}

fn default_retry_backoff_ms() -> u64 {
    1000 // 1 second base backoff time, doubled on each retry
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.translation.model.trim().is_empty() {
            return Err(anyhow!("Translation model must not be empty"));
        }

        if self.translation.max_words_per_chunk == 0 {
            return Err(anyhow!("max_words_per_chunk must be greater than zero"));
        }

        if self.translation.concurrent_requests == 0 {
            return Err(anyhow!("concurrent_requests must be greater than zero"));
        }

        if self.translation.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be greater than zero"));
        }

        if self.glossary.iter().any(|term| term.trim().is_empty()) {
            return Err(anyhow!("Glossary must not contain empty terms"));
        }

        if self.translation.resolve_api_key().is_empty() {
            return Err(anyhow!(
                "Translation API key is required; set translation.api_key or the {} environment variable",
                API_KEY_ENV_VAR
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            tone: Tone::default(),
            glossary: Vec::new(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl TranslationConfig {
    /// Get the API key, falling back to the environment when the config has none
    pub fn resolve_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            return self.api_key.clone();
        }

        std::env::var(API_KEY_ENV_VAR).unwrap_or_default()
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: String::new(),
            max_words_per_chunk: default_max_words_per_chunk(),
            concurrent_requests: default_concurrent_requests(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}
