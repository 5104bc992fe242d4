//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// Flag > environment variable > config file > default. This struct captures
/// the flag/env layer; config file defaults are resolved in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, if given on the command line or in the environment
    pub format: Option<OutputFormat>,

    /// API base URL override
    pub api_url: Option<String>,

    /// Custom config file path (defaults to ~/.aiblog/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            api_url: cli.api_url.clone(),
            config: cli.config.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}
