//! Command-line arguments and configuration resolution.
//!
//! Settings are layered: explicit flags and `MCP_RESOURCES_ROOT` win over the
//! config file, which wins over built-in defaults.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mcp_resources_core::{SandboxConfig, default_config_path};
use std::path::PathBuf;

/// MCP Resources - read-only filesystem resources over MCP.
///
/// Exposes every regular file under a sandbox directory as an MCP resource.
/// Without a subcommand the server runs on stdio.
#[derive(Parser, Debug)]
#[command(name = "mcp-resources")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Sandbox root directory
    #[arg(short, long, env = "MCP_RESOURCES_ROOT", global = true)]
    pub root: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not create sample files when the root is missing
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve resources over stdio
    Serve,

    /// Print the current resource listing
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the content of one resource as JSON
    Read {
        /// Resource identifier, e.g. `file://resources/notes.txt`
        identifier: String,
    },
}

/// Log line format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Listing output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One resource per line
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl Cli {
    /// Returns the subcommand, treating none as `serve`.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    /// Builds the effective sandbox configuration.
    ///
    /// An explicit `--config` must load. Otherwise the per-user default path
    /// is used when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed, or the
    /// resulting configuration is invalid.
    pub fn resolve_config(&self) -> Result<SandboxConfig> {
        let file = match &self.config {
            Some(path) => Some(path.clone()),
            None => default_config_path().filter(|p| p.is_file()),
        };

        let mut config = match file {
            Some(path) => SandboxConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => SandboxConfig::default(),
        };

        if let Some(root) = &self.root {
            config.root.clone_from(root);
        }
        if self.no_seed {
            config.seed_if_missing = false;
        }

        config.validate()?;
        Ok(config)
    }
}
