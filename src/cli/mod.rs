//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod context;
pub mod health;
pub mod init;
pub mod posts;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// AI-Blog CLI - generate blog posts from a prompt and read the feed
#[derive(Parser, Debug)]
#[command(name = "aiblog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "AIBLOG_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override the API base URL
    #[arg(long, global = true, env = "AIBLOG_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "AIBLOG_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "AIBLOG_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize AI-Blog configuration
    Init,

    /// Create an author account
    Register(CredentialArgs),

    /// Sign in and store the session token
    Login(CredentialArgs),

    /// Close the current session
    Logout,

    /// Generate a post from a prompt and show the updated feed
    #[command(after_help = "EXAMPLES:\n  \
            aiblog generate \"Why Rust ownership matters\"\n  \
            aiblog generate \"Ferris the crab\" --format json")]
    Generate {
        /// What the post should be about
        prompt: String,
    },

    /// Show the public feed in server order
    #[command(visible_alias = "feed")]
    Posts,

    /// Show configuration and session status
    Status,

    /// Check that the API is reachable
    Health,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   aiblog completion bash > /etc/bash_completion.d/aiblog
  zsh:    aiblog completion zsh > \"${fpath[1]}/_aiblog\"
  fish:   aiblog completion fish > ~/.config/fish/completions/aiblog.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Email and password, prompted for when not given
#[derive(Debug, Clone, clap::Args)]
pub struct CredentialArgs {
    /// Account email
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Account password (prompted without echo when omitted)
    #[arg(long, short = 'p')]
    pub password: Option<String>,
}
