//! Authentication models

use serde::{Deserialize, Serialize};

/// Email/password pair, held only for the duration of one request
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// True when either field is empty
    pub fn is_incomplete(&self) -> bool {
        self.email.is_empty() || self.password.is_empty()
    }
}

/// Author record returned by `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredAuthor {
    /// Author ID (optional, not every deployment returns it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Registered email
    pub email: String,
}

/// Token response from `POST /token`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// Opaque bearer credential
    pub access_token: String,

    /// Token scheme, always `bearer` in practice
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
