//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DENETH_API_BASE_URL` - Remote catalog API base URL
//!   (default: `https://deneth-fashion-backend.vercel.app`)
//! - `DENETH_WHATSAPP_NUMBER` - WhatsApp number orders are handed off to,
//!   in international format without `+` (default: 94740716403)
//! - `DENETH_CART_PATH` - Path of the durable cart file
//!   (default: `deneth-cart.json`)
//! - `GEMINI_API_KEY` - Gemini API key; the style assistant is disabled
//!   when unset
//! - `GEMINI_MODEL` - Gemini model name (default: `gemini-3-pro-preview`)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Blocklist of common placeholder patterns (case-insensitive).
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Remote catalog API base URL, without trailing slash.
    pub api_base_url: String,
    /// WhatsApp number the order hand-off deep link targets.
    pub whatsapp_number: String,
    /// Durable cart file (the fixed local-storage key).
    pub cart_path: PathBuf,
    /// Style assistant configuration; `None` disables the assistant.
    pub assistant: Option<AssistantConfig>,
}

/// Gemini assistant configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct AssistantConfig {
    /// Gemini API key.
    pub api_key: SecretString,
    /// Gemini model name, e.g. `gemini-3-pro-preview`.
    pub model: String,
}

impl std::fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is malformed or the assistant
    /// API key fails placeholder validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = trim_trailing_slash(get_env_or_default(
            "DENETH_API_BASE_URL",
            "https://deneth-fashion-backend.vercel.app",
        ));
        let whatsapp_number = get_env_or_default("DENETH_WHATSAPP_NUMBER", "94740716403");
        validate_whatsapp_number(&whatsapp_number)?;
        let cart_path = PathBuf::from(get_env_or_default("DENETH_CART_PATH", "deneth-cart.json"));
        let assistant = AssistantConfig::from_env()?;

        Ok(Self {
            api_base_url,
            whatsapp_number,
            cart_path,
            assistant,
        })
    }
}

impl AssistantConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(api_key) = get_optional_env("GEMINI_API_KEY") else {
            return Ok(None);
        };
        validate_secret_strength(&api_key, "GEMINI_API_KEY")?;

        Ok(Some(Self {
            api_key: SecretString::from(api_key),
            model: get_env_or_default("GEMINI_MODEL", "gemini-3-pro-preview"),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// The wa.me path segment only accepts digits (international format, no `+`).
fn validate_whatsapp_number(number: &str) -> Result<(), ConfigError> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "DENETH_WHATSAPP_NUMBER".to_string(),
            format!("expected digits only, got {number:?}"),
        ));
    }
    Ok(())
}

/// Validate that a secret is not an obvious placeholder.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}
