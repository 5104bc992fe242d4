//! Terminal renderer
//!
//! Pretty output streams post cards as they arrive. Table and JSON output
//! buffer the feed and print it once the stream ends. JSON output is one
//! enveloped line per event.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::content::PostView;
use crate::feed::{EMPTY_FEED, FeedEntry};
use crate::models::PostDisplay;
use crate::output::formatters::format_timestamp_local;
use crate::output::{json, table};
use crate::view::{ControlVisibility, Panel, Renderer, StatusKind, StatusMessage, placeholder_text};

/// Renders view events to stdout (spinner on stderr)
pub struct TerminalRenderer {
    format: OutputFormat,
    state: Mutex<RenderState>,
}

#[derive(Default)]
struct RenderState {
    spinner: Option<ProgressBar>,
    buffered: Vec<FeedEntry>,
    controls: Option<ControlVisibility>,
    /// Changed controls, announced after the next status line
    pending_hint: Option<ControlVisibility>,
}

/// JSON shape of a status line
#[derive(Serialize)]
struct StatusEvent<'a> {
    panel: Panel,
    #[serde(flatten)]
    message: &'a StatusMessage,
}

impl TerminalRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            state: Mutex::new(RenderState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, RenderState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn print_json_line<T: Serialize>(value: &T) {
        match json::format_json_line(value) {
            Ok(line) => println!("{}", line),
            Err(e) => log::warn!("Failed to serialize output: {}", e),
        }
    }

    fn print_card(view: &PostView) {
        println!("{}", view.title.bold());
        println!(
            "{}",
            format!(
                "Published: {} · Author ID: {}",
                format_timestamp_local(&view.created_at),
                view.author_id
            )
            .dimmed()
        );
        if let Some(seo) = &view.seo_description {
            println!("{}", seo.italic());
        }
        println!();
        println!("{}", view.body);
        println!();
    }

    fn print_hint(visibility: ControlVisibility) {
        if visibility.generate {
            println!(
                "  → Run {} to write a post",
                "aiblog generate <PROMPT>".cyan()
            );
        } else {
            println!("  → Run {} to sign in again", "aiblog login".cyan());
        }
    }

    fn print_buffered(&self, entries: &[FeedEntry]) {
        match self.format {
            OutputFormat::Json => {
                let posts: Vec<&PostView> = entries
                    .iter()
                    .filter_map(|entry| match entry {
                        FeedEntry::Post(view) => Some(view),
                        _ => None,
                    })
                    .collect();

                // Placeholders replace the list entirely
                match entries.first().and_then(placeholder_text) {
                    Some(text) if posts.is_empty() => Self::print_json_line(
                        &serde_json::json!({ "posts": [], "message": text }),
                    ),
                    _ => Self::print_json_line(&serde_json::json!({ "posts": posts })),
                }
            }
            OutputFormat::Table => {
                if let Some(text) = entries.first().and_then(placeholder_text) {
                    println!("{}", text);
                    return;
                }
                let rows: Vec<PostDisplay> = entries
                    .iter()
                    .filter_map(|entry| match entry {
                        FeedEntry::Post(view) => Some(PostDisplay::from(view)),
                        _ => None,
                    })
                    .collect();
                println!("{}", table::format_table(&rows, EMPTY_FEED));
            }
            OutputFormat::Pretty => {}
        }
    }
}

impl Renderer for TerminalRenderer {
    fn clear_status(&self, panel: Panel) {
        // Terminal output is append-only; each command starts with a clean panel
        log::debug!("Clearing {} status", panel.label());
    }

    fn status(&self, panel: Panel, message: &StatusMessage) {
        if matches!(self.format, OutputFormat::Json) {
            Self::print_json_line(&StatusEvent { panel, message });
            return;
        }

        let marker = match message.kind {
            StatusKind::Success => "✓".green(),
            StatusKind::Info => "○".cyan(),
            StatusKind::Error => "✗".red(),
        };
        let label = format!("[{}]", panel.label());
        println!("{} {} {}", marker, label.dimmed(), message.text);

        if let Some(visibility) = self.state().pending_hint.take() {
            Self::print_hint(visibility);
        }
    }

    fn controls(&self, visibility: ControlVisibility) {
        let mut state = self.state();
        let previous = state.controls.replace(visibility);

        // Only announce changes, not the initial state
        let Some(previous) = previous else { return };
        if previous == visibility || matches!(self.format, OutputFormat::Json) {
            return;
        }
        state.pending_hint = Some(visibility);
    }

    fn feed_started(&self) {
        let mut state = self.state();
        state.buffered.clear();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Loading posts...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        state.spinner = Some(spinner);
    }

    fn feed_entry(&self, entry: &FeedEntry) {
        let mut state = self.state();
        if let Some(spinner) = state.spinner.take() {
            spinner.finish_and_clear();
        }

        match self.format {
            OutputFormat::Pretty => match entry {
                FeedEntry::Post(view) => Self::print_card(view),
                other => {
                    if let Some(text) = placeholder_text(other) {
                        println!("{}", text.dimmed());
                    }
                }
            },
            OutputFormat::Table | OutputFormat::Json => state.buffered.push(entry.clone()),
        }
    }

    fn feed_finished(&self) {
        let entries = {
            let mut state = self.state();
            if let Some(spinner) = state.spinner.take() {
                spinner.finish_and_clear();
            }
            std::mem::take(&mut state.buffered)
        };

        self.print_buffered(&entries);
    }
}
