//! Post generation

use std::sync::Arc;

use crate::client::PostsApi;
use crate::client::models::GeneratedPost;
use crate::error::{ApiError, Result};

/// Submits prompts for generation on behalf of the signed-in author
pub struct GeneratorService<C: ?Sized> {
    client: Arc<C>,
}

impl<C: PostsApi + ?Sized> GeneratorService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Generate and store a post from `prompt`.
    ///
    /// The session check comes before the prompt check, and both happen
    /// before any request is sent.
    pub async fn generate(&self, prompt: &str, token: Option<&str>) -> Result<GeneratedPost> {
        let token = token.ok_or(ApiError::NotAuthenticated)?;

        if prompt.trim().is_empty() {
            return Err(ApiError::Validation("prompt is empty".to_string()).into());
        }

        self.client.generate_post(prompt, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockBlogClient;
    use crate::client::models::Credentials;
    use crate::error::Error;
    use crate::service::AuthService;
    use crate::session::{MemoryStore, SessionStore};

    #[tokio::test]
    async fn test_blank_prompt_never_hits_network() {
        let client = Arc::new(MockBlogClient::new());
        let generator = GeneratorService::new(client.clone());

        for prompt in ["", "   ", "\n\t"] {
            let err = generator.generate(prompt, Some("tok")).await.unwrap_err();
            assert!(matches!(err, Error::Api(ApiError::Validation(_))));
        }

        assert_eq!(client.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_missing_session_checked_first() {
        let client = Arc::new(MockBlogClient::new());
        let generator = GeneratorService::new(client.clone());

        let err = generator.generate("", None).await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::NotAuthenticated)));
        assert_eq!(client.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_returns_generated_title() {
        let client = Arc::new(MockBlogClient::new().with_generated_title("Rust Tips").await);
        let generator = GeneratorService::new(client);

        let generated = generator.generate("rust", Some("tok")).await.unwrap();

        assert_eq!(generated.title, "Rust Tips");
    }

    #[tokio::test]
    async fn test_login_token_is_attached() {
        let client = Arc::new(MockBlogClient::new().with_access_token("fresh-token").await);
        let auth = AuthService::new(client.clone());
        let generator = GeneratorService::new(client.clone());
        let mut session = SessionStore::new(Arc::new(MemoryStore::new()));

        auth.login(&Credentials::new("ana@example.com", "pw"), &mut session)
            .await
            .unwrap();
        generator
            .generate("write about ferris", session.token())
            .await
            .unwrap();

        assert_eq!(client.captured_tokens().await, vec!["fresh-token".to_string()]);
    }

    #[tokio::test]
    async fn test_server_error_passes_through() {
        let client = Arc::new(
            MockBlogClient::new()
                .with_error(ApiError::Server("Could not validate credentials".to_string()))
                .await,
        );
        let generator = GeneratorService::new(client);

        let err = generator.generate("rust", Some("stale")).await.unwrap_err();

        match err {
            Error::Api(ApiError::Server(msg)) => assert_eq!(msg, "Could not validate credentials"),
            other => panic!("Expected server error, got {:?}", other),
        }
    }
}
