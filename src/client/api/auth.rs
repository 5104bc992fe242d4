//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AccessToken, Credentials, RegisteredAuthor};
use crate::error::Result;

/// Account operations for the AI-Blog API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /register` with a JSON body
    async fn register(&self, credentials: &Credentials) -> Result<RegisteredAuthor>;

    /// `POST /token` with form-encoded `username`/`password`
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken>;
}
