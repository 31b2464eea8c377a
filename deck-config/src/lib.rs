//! Shared configuration loader for the deck toolchain.
//!
//! `defaults/deck.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DeckConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use deck_babel::HtmlOptions;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/deck.default.toml");

/// Top-level configuration consumed by deck applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckConfig {
    pub output: OutputConfig,
    pub runtime: RuntimeConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Where the generated document fetches its scripts and which relay it talks to.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    pub reveal_url: String,
    pub socket_io_url: String,
    pub relay_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    pub deny_warnings: bool,
}

impl DeckConfig {
    /// Options for the HTML emitter.
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            title: self.output.title.clone(),
            reveal_url: self.runtime.reveal_url.clone(),
            socket_io_url: self.runtime.socket_io_url.clone(),
            relay_url: self.runtime.relay_url.clone(),
        }
    }
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DeckConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DeckConfig, ConfigError> {
    Loader::new().build()
}
