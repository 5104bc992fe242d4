//! AI-Blog API client implementation

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, PostsApi};
use super::models::{
    AccessToken, Credentials, GeneratePostRequest, GeneratedPost, HealthStatus, Post,
    RegisteredAuthor,
};
use crate::error::{ApiError, Result};

/// Fallback messages used when an error response carries no usable `detail`
pub const REGISTER_FAILED: &str = "Registration failed.";
pub const LOGIN_FAILED: &str = "Login failed.";
pub const GENERATE_FAILED: &str = "Post generation failed.";
pub const POSTS_FAILED: &str = "Failed to load posts.";
pub const HEALTH_FAILED: &str = "Health check failed.";

/// HTTP client for the AI-Blog API.
///
/// No request timeout is configured; latency is bounded by the server.
pub struct BlogClient {
    http: HttpClient,
    base_url: String,
}

impl BlogClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("aiblog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a successful JSON response.
    ///
    /// Any non-2xx status becomes [`ApiError::Server`] with the response's
    /// `detail` string, or `fallback` when there is none.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        label: &str,
        fallback: &str,
    ) -> Result<T> {
        log::debug!("Request: {}", label);

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("Response: {} -> {}", label, status);

        if status.is_success() {
            let data = response.json::<T>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return Ok(data);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_detail(&body).unwrap_or_else(|| fallback.to_string());
        Err(ApiError::Server(message).into())
    }
}

/// Extract a human-readable `detail` string from an error body.
///
/// Validation failures carry `detail` as a list of objects; those are not
/// shown verbatim.
fn error_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<serde_json::Value>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

#[async_trait]
impl AuthApi for BlogClient {
    async fn register(&self, credentials: &Credentials) -> Result<RegisteredAuthor> {
        let request = self.http.post(self.url("/register")).json(credentials);
        self.execute(request, "POST /register", REGISTER_FAILED).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        let form = [
            ("username", credentials.email.as_str()),
            ("password", credentials.password.as_str()),
        ];
        let request = self.http.post(self.url("/token")).form(&form);
        self.execute(request, "POST /token", LOGIN_FAILED).await
    }
}

#[async_trait]
impl PostsApi for BlogClient {
    async fn generate_post(&self, prompt: &str, token: &str) -> Result<GeneratedPost> {
        let request = self
            .http
            .post(self.url("/generate-post"))
            .bearer_auth(token)
            .json(&GeneratePostRequest { prompt });
        self.execute(request, "POST /generate-post", GENERATE_FAILED).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        let request = self.http.get(self.url("/posts"));
        let posts: Vec<Post> = self.execute(request, "GET /posts", POSTS_FAILED).await?;
        log::debug!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let request = self.http.get(self.url("/health"));
        self.execute(request, "GET /health", HEALTH_FAILED).await
    }
}
