//! Engine configuration for anscore
//!
//! Configuration is read from a TOML file: an explicit `--config` path, else
//! `$ANSCORE_CONFIG_DIR/config.toml`, else `~/.config/anscore/config.toml`. Missing
//! files mean defaults; every field has a default so partial files are valid.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_config;
use crate::error::{AnscoreError, Result};

pub use types::{
    BackendPreference, ConcisenessConfig, EngineConfig, ReadabilityConfig, SentimentConfig,
    SimilarityConfig,
};

const CONFIG_DIR: &str = "anscore";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ANSCORE_CONFIG_DIR";

impl EngineConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AnscoreError::invalid_config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration: explicit path, then the config directory, then defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading discovered config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Default config location, honoring the directory override
    pub fn default_path() -> Option<PathBuf> {
        let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(dir.join(CONFIG_FILE))
    }

    /// Check weights and thresholds
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        let r = &self.readability;
        if !r.ideal_sentence_chars.is_finite() || r.ideal_sentence_chars < 0.0 {
            bail_config!(
                "readability.ideal_sentence_chars must be a non-negative number, got {}",
                r.ideal_sentence_chars
            );
        }
        if !r.tolerance_chars.is_finite() || r.tolerance_chars <= 0.0 {
            bail_config!(
                "readability.tolerance_chars must be positive, got {}",
                r.tolerance_chars
            );
        }

        let c = &self.conciseness;
        if c.min_chars == 0 {
            bail_config!("conciseness.min_chars must be positive");
        }
        if c.max_chars < c.min_chars {
            bail_config!(
                "conciseness.max_chars ({}) must not be below min_chars ({})",
                c.max_chars,
                c.min_chars
            );
        }
        if c.zero_chars <= c.max_chars {
            bail_config!(
                "conciseness.zero_chars ({}) must exceed max_chars ({})",
                c.zero_chars,
                c.max_chars
            );
        }

        Ok(())
    }
}
