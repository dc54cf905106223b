//! Global CLI options shared across all commands
//!
//! Consolidates the global flags into one struct so handlers take a single
//! `&GlobalOptions` instead of threading each flag through.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; the config file is merged in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.cooked/config.yaml)
    pub config: Option<String>,

    /// Keep tokens and the recipe of the day in memory only
    pub ephemeral: bool,

    /// Recipe provider base URL override
    pub provider_url: Option<String>,

    /// Profile backend base URL override
    pub backend_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            ephemeral: cli.ephemeral,
            provider_url: cli.provider_url.clone(),
            backend_url: cli.backend_url.clone(),
        }
    }

    /// The config file path, from `--config` or the default location
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(PathBuf::from(path)),
            None => Config::default_path(),
        }
    }

    /// Apply URL flags on top of a loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(url) = &self.provider_url {
            config.provider_url = url.clone();
        }
        if let Some(url) = &self.backend_url {
            config.backend_url = url.clone();
        }
    }
}
