//! Registration and login

use std::sync::Arc;

use crate::client::AuthApi;
use crate::client::models::{Credentials, RegisteredAuthor};
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Validates credentials locally, then talks to the auth endpoints
pub struct AuthService<C: ?Sized> {
    client: Arc<C>,
}

impl<C: AuthApi + ?Sized> AuthService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Register a new author. Does not sign in.
    pub async fn register(&self, credentials: &Credentials) -> Result<RegisteredAuthor> {
        ensure_complete(credentials)?;
        self.client.register(credentials).await
    }

    /// Exchange credentials for a token and install it in `session`.
    ///
    /// Returns the issued token. The session is left untouched on failure.
    pub async fn login(
        &self,
        credentials: &Credentials,
        session: &mut SessionStore,
    ) -> Result<String> {
        ensure_complete(credentials)?;
        let token = self.client.login(credentials).await?;
        log::debug!("Issued {} token", token.token_type);
        session.set(token.access_token.clone())?;
        Ok(token.access_token)
    }
}

fn ensure_complete(credentials: &Credentials) -> Result<()> {
    if credentials.is_incomplete() {
        return Err(ApiError::Validation("email and password are required".to_string()).into());
    }
    Ok(())
}
