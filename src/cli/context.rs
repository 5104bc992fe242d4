//! Command execution context
//!
//! Loads configuration once and hands commands a ready client, session and
//! view controller.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::BlogClient;
use crate::config::Config;
use crate::error::Result;
use crate::output::TerminalRenderer;
use crate::session::{FileStore, SessionStore};
use crate::view::ViewController;

/// Context for command execution containing client and runtime options.
pub struct CommandContext {
    /// Resolved config file location
    pub config_path: PathBuf,
    /// API client rooted at the resolved base URL
    pub client: Arc<BlogClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be read or parsed.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_from(&config_path)?;

        let api_url = config.api_url(opts.api_url_ref());
        log::debug!("Using API at {}", api_url);
        let client = Arc::new(BlogClient::new(api_url)?);

        let format = resolve_format(opts.format, config.preferences.format.as_deref());

        Ok(Self {
            config_path,
            client,
            format,
        })
    }

    /// Durable storage file holding the session
    pub fn storage(&self) -> FileStore {
        FileStore::new(Config::storage_path(&self.config_path))
    }

    /// Session restored from durable storage
    pub fn session(&self) -> SessionStore {
        let mut session = SessionStore::new(Arc::new(self.storage()));
        session.load();
        session
    }

    /// View controller rendering to the terminal in the chosen format
    pub fn controller(&self) -> ViewController<BlogClient> {
        let renderer = Arc::new(TerminalRenderer::new(self.format));
        ViewController::new(Arc::clone(&self.client), self.session(), renderer)
    }
}

/// Pick the output format: flag/env, then config preference, then default.
fn resolve_format(flag: Option<OutputFormat>, preference: Option<&str>) -> OutputFormat {
    if let Some(format) = flag {
        return format;
    }

    match preference.map(|name| (name, OutputFormat::from_name(name))) {
        Some((_, Some(format))) => format,
        Some((name, None)) => {
            log::warn!("Unknown format '{}' in config, using pretty", name);
            OutputFormat::default()
        }
        None => OutputFormat::default(),
    }
}
