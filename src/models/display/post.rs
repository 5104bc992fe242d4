//! Post display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{single_line, truncate_string};
use crate::content::PostView;
use crate::output::formatters::format_timestamp_local;

/// Maximum body characters shown in a table cell
const BODY_PREVIEW_CHARS: usize = 60;

/// Maximum title characters shown in a table cell
const TITLE_CHARS: usize = 40;

/// Post display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PostDisplay {
    /// Display title
    #[tabled(rename = "TITLE")]
    pub title: String,

    /// Publication time in local time
    #[tabled(rename = "PUBLISHED")]
    pub published: String,

    /// Author ID
    #[tabled(rename = "AUTHOR")]
    pub author_id: i64,

    /// Body preview
    #[tabled(rename = "BODY")]
    pub body: String,
}

impl From<&PostView> for PostDisplay {
    fn from(view: &PostView) -> Self {
        Self {
            title: truncate_string(&view.title, TITLE_CHARS),
            published: format_timestamp_local(&view.created_at),
            author_id: view.author_id,
            body: truncate_string(&single_line(&view.body), BODY_PREVIEW_CHARS),
        }
    }
}
