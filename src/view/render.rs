//! Rendering seam between the view controller and a concrete output

use super::{ControlVisibility, Panel, StatusMessage};
use crate::feed::FeedEntry;

/// Output surface driven by [`ViewController`](super::ViewController).
///
/// Methods take `&self`; implementations keep whatever interior state they
/// need, since the renderer is also notified from session listeners.
pub trait Renderer: Send + Sync {
    /// Empty a panel's status region before an action runs
    fn clear_status(&self, panel: Panel);

    /// Show the outcome of an action
    fn status(&self, panel: Panel, message: &StatusMessage);

    /// Session-dependent controls changed (or are being shown initially)
    fn controls(&self, visibility: ControlVisibility);

    /// A feed load began; any previously rendered feed is discarded
    fn feed_started(&self);

    /// Render one feed entry, in arrival order
    fn feed_entry(&self, entry: &FeedEntry);

    /// The feed stream is exhausted
    fn feed_finished(&self);
}
