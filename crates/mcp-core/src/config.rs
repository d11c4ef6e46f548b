//! Startup configuration for the resource server.
//!
//! Configuration is read once before the sandbox root is established. Values
//! come from, in order of precedence: command-line arguments and environment
//! (applied by the binary), a TOML file, and the defaults below.
//!
//! # Examples
//!
//! ```
//! use mcp_resources_core::SandboxConfig;
//! use std::path::PathBuf;
//!
//! let config = SandboxConfig::from_toml_str(r#"
//!     root = "/srv/resources"
//!     seed_if_missing = false
//! "#).unwrap();
//!
//! assert_eq!(config.root, PathBuf::from("/srv/resources"));
//! assert!(!config.seed_if_missing);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default sandbox directory, relative to the working directory.
const DEFAULT_ROOT: &str = "sample-resources";

/// Sandbox configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SandboxConfig {
    /// Directory exposed as the sandbox root.
    ///
    /// Default: `./sample-resources`
    pub root: PathBuf,

    /// Populate the root with sample fixtures when it does not exist.
    ///
    /// Default: true
    pub seed_if_missing: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            seed_if_missing: true,
        }
    }
}

impl SandboxConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_resources_core::SandboxConfig;
    ///
    /// let config = SandboxConfig::builder()
    ///     .root("/data/exposed")
    ///     .seed_if_missing(false)
    ///     .build();
    ///
    /// assert!(!config.seed_if_missing);
    /// ```
    #[must_use]
    pub fn builder() -> SandboxConfigBuilder {
        SandboxConfigBuilder::new()
    }

    /// Parses configuration from TOML text.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the text is not valid TOML, contains
    /// unknown keys, or fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("Invalid configuration: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the root path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::ConfigError {
                message: "Sandbox root path cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`SandboxConfig`].
#[derive(Debug, Clone, Default)]
pub struct SandboxConfigBuilder {
    config: SandboxConfig,
}

impl SandboxConfigBuilder {
    /// Creates a builder starting from defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sandbox root directory.
    #[must_use]
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = root.into();
        self
    }

    /// Sets whether a missing root is seeded with fixtures.
    #[must_use]
    pub const fn seed_if_missing(mut self, seed: bool) -> Self {
        self.config.seed_if_missing = seed;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> SandboxConfig {
        self.config
    }
}

/// Default configuration file location.
///
/// `<config dir>/mcp-resources/config.toml`, or `None` when the platform has
/// no configuration directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mcp-resources").join("config.toml"))
}
