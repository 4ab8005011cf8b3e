//! # insight-config
//!
//! Layered configuration loading for insight validation using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`INSIGHT_*` prefix, `__` as separator)
//! 2. Project-level `.insight/config.toml`
//! 3. User-level `~/.config/insight/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `INSIGHT_VALIDATION__MODE` -> `validation.mode`,
//! `INSIGHT_GENERAL__PRETTY` -> `general.pretty`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use insight_config::InsightConfig;
//!
//! let config = InsightConfig::load_with_dotenv().expect("config");
//! let policy = config.validation.policy();
//! ```

mod error;
mod general;
mod validation;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var prefix for all configuration keys.
pub const ENV_PREFIX: &str = "INSIGHT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InsightConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl InsightConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Load configuration with an extra TOML file layered above the project
    /// file and below environment variables.
    ///
    /// `path` is used as given: it must exist and is not searched for in
    /// parent directories.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileNotFound` if `path` does not exist, or
    /// another `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Self::load_dotenv();
        Self::from_figment(Self::figment_with(Some(path)))
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validation.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".insight/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file (e.g. `--config`)
        if let Some(path) = extra {
            figment = figment.merge(Toml::file_exact(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("insight").join("config.toml"))
    }

    /// Load `.env` from the current directory. Silently does nothing if no
    /// `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
