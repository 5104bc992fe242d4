//! Mock AI-Blog API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, PostsApi};
use super::models::{AccessToken, Credentials, GeneratedPost, HealthStatus, Post, RegisteredAuthor};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockBlogClient::new().with_posts(vec![post("Hello", "World")]).await;
///
/// let posts = mock.list_posts().await?;
/// assert_eq!(posts.len(), 1);
/// ```
pub struct MockBlogClient {
    /// Posts to return from list_posts
    posts: Arc<Mutex<Vec<Post>>>,
    /// Token to return from login
    access_token: Arc<Mutex<String>>,
    /// Title to return from generate_post
    generated_title: Arc<Mutex<String>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Bearer tokens received by generate_post, in call order
    captured_tokens: Arc<Mutex<Vec<String>>>,
}

impl Default for MockBlogClient {
    fn default() -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            access_token: Arc::new(Mutex::new("mock-token".to_string())),
            generated_title: Arc::new(Mutex::new("Generated".to_string())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub register: usize,
    pub login: usize,
    pub generate_post: usize,
    pub list_posts: usize,
    pub health: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.register + self.login + self.generate_post + self.list_posts + self.health
    }
}

impl MockBlogClient {
    /// Create a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure posts to return from list_posts.
    pub async fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.posts.lock().await = posts;
        self
    }

    /// Configure the token issued by login.
    pub async fn with_access_token(self, token: &str) -> Self {
        *self.access_token.lock().await = token.to_string();
        self
    }

    /// Configure the title returned by generate_post.
    pub async fn with_generated_title(self, title: &str) -> Self {
        *self.generated_title.lock().await = title.to_string();
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Bearer tokens sent with generate_post calls.
    pub async fn captured_tokens(&self) -> Vec<String> {
        self.captured_tokens.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockBlogClient {
    async fn register(&self, credentials: &Credentials) -> Result<RegisteredAuthor> {
        self.call_count.lock().await.register += 1;
        self.check_error().await?;

        Ok(RegisteredAuthor {
            id: Some(1),
            email: credentials.email.clone(),
        })
    }

    async fn login(&self, _credentials: &Credentials) -> Result<AccessToken> {
        self.call_count.lock().await.login += 1;
        self.check_error().await?;

        Ok(AccessToken {
            access_token: self.access_token.lock().await.clone(),
            token_type: "bearer".to_string(),
        })
    }
}

#[async_trait]
impl PostsApi for MockBlogClient {
    async fn generate_post(&self, _prompt: &str, token: &str) -> Result<GeneratedPost> {
        self.call_count.lock().await.generate_post += 1;
        self.captured_tokens.lock().await.push(token.to_string());
        self.check_error().await?;

        Ok(GeneratedPost {
            id: None,
            title: self.generated_title.lock().await.clone(),
        })
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.call_count.lock().await.list_posts += 1;
        self.check_error().await?;

        Ok(self.posts.lock().await.clone())
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.call_count.lock().await.health += 1;
        self.check_error().await?;

        Ok(HealthStatus {
            status: "ok".to_string(),
        })
    }
}

/// Build a post with fixed metadata for tests.
pub fn post(title: &str, body: &str) -> Post {
    Post {
        id: None,
        title: title.to_string(),
        body: body.to_string(),
        seo_description: None,
        created_at: "2025-01-15T12:00:00".to_string(),
        author_id: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockBlogClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.list_posts().await.is_err());
        assert!(mock.list_posts().await.is_ok());
        assert_eq!(mock.call_counts().await.list_posts, 2);
    }

    #[tokio::test]
    async fn test_mock_captures_tokens() {
        let mock = MockBlogClient::new().with_generated_title("Hello").await;

        let generated = mock.generate_post("prompt", "tok-a").await.unwrap();

        assert_eq!(generated.title, "Hello");
        assert_eq!(mock.captured_tokens().await, vec!["tok-a".to_string()]);
        assert_eq!(mock.call_counts().await.total(), 1);
    }
}
