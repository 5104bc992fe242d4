//! Post view-models: what the feed actually displays

use serde::Serialize;

use super::normalize::normalize_body;
use crate::client::models::Post;

/// Title the legacy pipeline stored when the model produced none
pub const PLACEHOLDER_TITLE: &str = "Artículo generado";

/// Display-ready post, derived from a [`Post`] at render time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub author_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl From<Post> for PostView {
    /// Apply the normalizer to the stored body.
    ///
    /// A recovered title only replaces the stored one when the stored title
    /// is the placeholder. A recovered body always replaces the stored body.
    fn from(post: Post) -> Self {
        let mut title = post.title;
        let mut body = post.body;

        if let Some(normalized) = normalize_body(&body) {
            if let Some(recovered) = normalized.title {
                if title == PLACEHOLDER_TITLE {
                    title = recovered;
                }
            }
            if let Some(recovered) = normalized.body {
                body = recovered;
            }
        }

        Self {
            id: post.id,
            title,
            body,
            created_at: post.created_at,
            author_id: post.author_id,
            seo_description: post.seo_description.filter(|s| !s.is_empty()),
        }
    }
}
