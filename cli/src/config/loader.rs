//! Simple CLI configuration loader for PersistenceAI
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./persistence-ai.json or ./.persistence-ai/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/persistence-ai/config.json or ~/.config/persistence-ai/config.json
//! 4. Environment variables: PERSISTENCE_AI_PROVIDER / PERSISTENCE_AI_MODEL
//! 5. Built-in defaults (a bare invocation always succeeds)

use anyhow::{anyhow, Context, Result};
use persistence_ai_core::{Config, ConfigError, Provider};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw configuration file format (simple single-file schema)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    /// Provider identifier
    pub provider: String,
    /// Model name (optional, resolved from the provider default if not specified)
    #[serde(default)]
    pub model: Option<String>,
}

/// CLI configuration loader
pub struct ConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    provider_override: Option<String>,
    model_override: Option<String>,
}

impl ConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            provider_override: None,
            model_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set provider override
    pub fn with_provider_override(mut self, provider: String) -> Self {
        self.provider_override = Some(provider);
        self
    }

    /// Set model override
    pub fn with_model_override(mut self, model: String) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<Config> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            // Use explicit config override
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            // Search in priority order
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(provider) = &self.provider_override {
            config.provider = provider.clone();
        }
        if let Some(model) = &self.model_override {
            config.model = Some(model.clone());
        }

        // Step 3: Resolve to final config
        self.resolve(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 3. Environment variables
        if let Some(config) = self.try_load_env()? {
            return Ok(config);
        }

        // 4. Built-in defaults (model resolved from the provider default)
        debug!("No configuration found, using built-in defaults");
        Ok(RawConfig {
            provider: Config::default().provider,
            model: None,
        })
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./persistence-ai.json first
        let cwd_json = cwd.join("persistence-ai.json");
        if cwd_json.exists() {
            return Ok(Some(self.load_file(&cwd_json).await?));
        }

        // Try ./.persistence-ai/config.json
        let dir_config = cwd.join(".persistence-ai").join("config.json");
        if dir_config.exists() {
            return Ok(Some(self.load_file(&dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("persistence-ai").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from environment variables
    fn try_load_env(&self) -> Result<Option<RawConfig>> {
        let provider = std::env::var("PERSISTENCE_AI_PROVIDER").ok();
        let model = std::env::var("PERSISTENCE_AI_MODEL").ok();

        if provider.is_none() && model.is_none() {
            return Ok(None);
        }

        debug!("Using configuration from environment variables");
        Ok(Some(RawConfig {
            provider: provider.unwrap_or_else(|| Config::default().provider),
            model,
        }))
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(ConfigError::FileNotFound {
                    path: config_file.display().to_string(),
                }
                .into())
            }
        } else {
            Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into())
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!("Loading configuration from {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else if let Ok(home) = std::env::var("HOME") {
            Some(PathBuf::from(home).join(".config"))
        } else {
            None
        }
    }

    /// Resolve raw config to a validated Config
    fn resolve(&self, config: RawConfig) -> Result<Config> {
        // Fill a missing model from the provider default
        let model = match config.model {
            Some(model) => model,
            None => {
                let provider = Provider::parse(&config.provider);
                provider
                    .default_model()
                    .map(str::to_string)
                    .ok_or(ConfigError::MissingField {
                        field: "model".to_string(),
                    })?
            }
        };

        let resolved = Config::new(config.provider, model);

        // Validate
        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
