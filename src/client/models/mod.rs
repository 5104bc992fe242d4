//! AI-Blog API data models

mod auth;
mod post;

pub use auth::{AccessToken, Credentials, RegisteredAuthor};
pub use post::{GeneratePostRequest, GeneratedPost, HealthStatus, Post};
