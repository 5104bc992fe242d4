//! Post models

use serde::{Deserialize, Serialize};

/// Post as served by `GET /posts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post ID (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Stored title
    pub title: String,

    /// Stored body; may hold a legacy embedded JSON document
    pub body: String,

    /// Short SEO summary written by the generator (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,

    /// Creation timestamp as sent by the server (RFC 3339 or naive ISO 8601)
    pub created_at: String,

    /// Author ID
    pub author_id: i64,
}

/// Request body for `POST /generate-post`
#[derive(Debug, Clone, Serialize)]
pub struct GeneratePostRequest<'a> {
    pub prompt: &'a str,
}

/// Response of `POST /generate-post`; only the title is relied on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPost {
    /// Post ID (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Title of the newly stored post
    pub title: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
