//! Shared configuration loader for the houlang toolchain.
//!
//! `defaults/houlang.default.toml` is embedded into the crate so that docs and
//! runtime behavior stay in sync. Callers layer user-specific files on top of
//! those defaults via [`Loader`] before deserializing into [`HoulangConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/houlang.default.toml");

/// Top-level configuration consumed by houlang tooling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HoulangConfig {
    pub inspect: InspectConfig,
    pub outline: OutlineConfig,
}

/// Controls inspection output (AST renderings and token dumps).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectConfig {
    pub ast: InspectAstConfig,
    pub tokens: InspectTokensConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectAstConfig {
    pub show_line_numbers: bool,
    pub include_ranges: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectTokensConfig {
    pub pretty_json: bool,
}

/// Week outline (document symbol) options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutlineConfig {
    pub include_day_lines: bool,
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

    /// Apply a single key/value override, e.g. `("outline.include_day_lines", true)`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HoulangConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HoulangConfig, ConfigError> {
    Loader::new().build()
}
