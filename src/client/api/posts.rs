//! Posts API trait

use async_trait::async_trait;

use crate::client::models::{GeneratedPost, HealthStatus, Post};
use crate::error::Result;

/// Post generation and listing operations
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// `POST /generate-post` authenticated with `token`
    async fn generate_post(&self, prompt: &str, token: &str) -> Result<GeneratedPost>;

    /// `GET /posts`, unauthenticated, in server order
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus>;
}
