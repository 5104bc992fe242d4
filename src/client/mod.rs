//! AI-Blog API client

pub mod api;
pub mod blog;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, PostsApi};
pub use blog::BlogClient;
#[cfg(test)]
pub use mock::MockBlogClient;

/// Full AI-Blog API surface
pub trait BlogApi: AuthApi + PostsApi {}

impl<T: AuthApi + PostsApi> BlogApi for T {}
