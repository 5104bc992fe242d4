//! Feed loader
//!
//! Turns `GET /posts` into a lazy, one-shot stream of [`FeedEntry`] values.
//! Nothing is fetched until the stream is first polled, and every load
//! refetches: posts are never cached between loads.

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use serde::Serialize;

use crate::client::PostsApi;
use crate::content::PostView;
use crate::error::Error;

/// One rendered item of the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedEntry {
    /// A normalized post, in server order
    Post(PostView),

    /// The collection is empty
    Empty,

    /// The feed could not be loaded; carries the placeholder text
    Unavailable { message: String },
}

impl FeedEntry {
    /// Placeholder for a failed load. Transport failures read differently
    /// from the server refusing.
    fn unavailable(err: &Error) -> Self {
        let message = match err {
            Error::Api(api) if api.is_network() => "Network error while loading posts.",
            _ => "Failed to load posts.",
        };
        FeedEntry::Unavailable {
            message: message.to_string(),
        }
    }
}

/// Text of the [`FeedEntry::Empty`] placeholder
pub const EMPTY_FEED: &str = "No posts yet.";

/// Loads the public feed through any [`PostsApi`]
pub struct FeedLoader<C: ?Sized> {
    client: Arc<C>,
}

impl<C: PostsApi + ?Sized + 'static> FeedLoader<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Build the feed stream.
    ///
    /// Yields exactly one `Unavailable` entry on failure, exactly one `Empty`
    /// entry for an empty collection, and otherwise one `Post` per post.
    pub fn load(&self) -> BoxStream<'static, FeedEntry> {
        let client = Arc::clone(&self.client);

        stream::once(async move { client.list_posts().await })
            .flat_map(|result| match result {
                Ok(posts) if posts.is_empty() => stream::iter([FeedEntry::Empty]).boxed(),
                Ok(posts) => {
                    log::debug!("Normalizing {} posts", posts.len());
                    stream::iter(posts)
                        .map(|post| FeedEntry::Post(PostView::from(post)))
                        .boxed()
                }
                Err(err) => {
                    log::debug!("Feed load failed: {}", err);
                    stream::iter([FeedEntry::unavailable(&err)]).boxed()
                }
            })
            .boxed()
    }
}
