//! # way-config
//!
//! Layered configuration loading for Waymark using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WAYMARK_*` prefix, `__` as separator)
//! 2. Project-level `.waymark/config.toml`
//! 3. User-level `~/.config/waymark/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WAYMARK_ENGINE__PARALLEL` -> `engine.parallel`,
//! `WAYMARK_ENGINE__FAIL_ON` -> `engine.fail_on`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use way_config::WaymarkConfig;
//!
//! let config = WaymarkConfig::load_with_dotenv().expect("config");
//! assert!(config.engine.decision_data_usage_threshold > 0.0);
//! ```

mod categories;
mod engine;
mod error;

pub use categories::CategoriesConfig;
pub use engine::EngineConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WaymarkConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub categories: CategoriesConfig,
}

impl WaymarkConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables) and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if `.env`
    /// loading is wanted.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support. The typical entry point
    /// for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".waymark/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("WAYMARK_").split("__"))
    }

    /// Range checks that figment cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.engine.decision_data_usage_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold { value: threshold });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("waymark").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or the current dir
    /// looking for a `.env` file. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
