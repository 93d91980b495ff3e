//! Minimal configuration types for PersistenceAI core
//!
//! Core only holds fully resolved configuration. All discovery, loading,
//! and merging happens in the CLI layer.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// AI vendors the CLI knows default models for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Anthropic Claude models
    #[serde(rename = "anthropic")]
    Anthropic,
    /// OpenAI models
    #[serde(rename = "openai")]
    OpenAI,
    /// Google AI models (Gemini)
    #[serde(rename = "google")]
    Google,
    /// Any other vendor, kept as free text
    #[serde(rename = "custom")]
    Custom(String),
}

impl Provider {
    /// Parse a provider identifier. Unknown text becomes `Custom`,
    /// so any value remains representable.
    pub fn parse(s: &str) -> Self {
        match s {
            "anthropic" => Provider::Anthropic,
            "openai" => Provider::OpenAI,
            "google" => Provider::Google,
            other => Provider::Custom(other.to_string()),
        }
    }

    /// Get the provider name as a string
    pub fn as_str(&self) -> &str {
        match self {
            Provider::Anthropic => "anthropic",
            Provider::OpenAI => "openai",
            Provider::Google => "google",
            Provider::Custom(name) => name,
        }
    }

    /// Get the default model for this provider
    pub fn default_model(&self) -> Option<&'static str> {
        match self {
            Provider::Anthropic => Some("claude-sonnet-4"),
            Provider::OpenAI => Some("gpt-4o"),
            Provider::Google => Some("gemini-pro"),
            Provider::Custom(_) => None,
        }
    }
}

/// The effective CLI configuration: which vendor and which model variant
/// the tool is set to use.
///
/// Field order is provider first, then model; the derived `Debug` form is
/// the representation the CLI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Provider identifier (e.g. "anthropic")
    pub provider: String,
    /// Model name/identifier (e.g. "claude-sonnet-4")
    pub model: String,
}

impl Config {
    /// Create a new config. Any text is accepted for either field.
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }

    /// Check that both fields are non-empty.
    ///
    /// Direct construction accepts any text; the CLI calls this after
    /// applying overrides, where an empty value is always a flag or file
    /// mistake.
    pub fn validate(&self) -> Result<()> {
        if self.provider.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "provider".to_string(),
                value: self.provider.clone(),
            }
            .into());
        }

        if self.model.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model".to_string(),
                value: self.model.clone(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            model: "claude-sonnet-4".to_string(),
        }
    }
}
