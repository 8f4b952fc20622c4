//! Shared configuration loader for the hdf5c tools.
//!
//! `defaults/hdf5c.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults
//! via [`Loader`] before deserializing into [`Hdf5cConfig`]. The per-user file lives at
//! [`user_config_path`] (`$XDG_CONFIG_HOME/hdf5c/config.toml` on Linux) and is optional.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/hdf5c.default.toml");

/// Top-level configuration consumed by hdf5c applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Hdf5cConfig {
    pub lexer: LexerConfig,
    pub output: OutputConfig,
}

/// Lexer selection and keyword set.
#[derive(Debug, Clone, Deserialize)]
pub struct LexerConfig {
    pub default: String,
    pub extra_keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How token streams are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One `position<TAB>category<TAB>text` line per token
    Tag,
    /// Pretty printed JSON array
    Json,
    /// The detokenized source
    Source,
}

/// Location of the per-user configuration file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hdf5c").join("config.toml"))
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer the per-user configuration file when there is one.
    pub fn with_user_file(self) -> Self {
        match user_config_path() {
            Some(path) => self.with_optional_file(path),
            None => self,
        }
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Hdf5cConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Hdf5cConfig, ConfigError> {
    Loader::new().build()
}
