//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Registration and token issuance
//! - [`PostsApi`] - Post generation, the public feed and health
//!
//! The [`BlogApi`](super::BlogApi) super-trait combines both.

mod auth;
mod posts;

pub use auth::AuthApi;
pub use posts::PostsApi;
