//! # quill-config
//!
//! Layered configuration loading for Quill using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUILL_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY` (alias for `genai.api_key`)
//! 3. Project-level `.quill/config.toml`
//! 4. User-level `~/.config/quill/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUILL_GENAI__MODEL` -> `genai.model`, `QUILL_SERVER__LISTEN` -> `server.listen`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use quill_config::QuillConfig;
//!
//! let config = QuillConfig::load_with_dotenv().expect("config");
//!
//! if config.genai.is_configured() {
//!     println!("model: {}", config.genai.model);
//! }
//! ```

mod draft;
mod error;
mod genai;
mod server;

pub use draft::DraftConfig;
pub use error::ConfigError;
pub use genai::GenAiConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    #[serde(default)]
    pub genai: GenAiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub draft: DraftConfig,
}

impl QuillConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the nearest `.env` file before building the
    /// figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
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
        let local_path = PathBuf::from(".quill/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Conventional API key variable
        figment = figment.merge(
            Env::raw()
                .only(&["GEMINI_API_KEY"])
                .map(|_| "genai.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("QUILL_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quill").join("config.toml"))
    }

    /// Fail fast when the generation service cannot be reached.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if no API key is set.
    pub fn require_genai(&self) -> Result<&GenAiConfig, ConfigError> {
        if self.genai.is_configured() {
            Ok(&self.genai)
        } else {
            Err(ConfigError::NotConfigured {
                section: "genai".into(),
            })
        }
    }
}
