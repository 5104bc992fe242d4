//! View controller
//!
//! Wires user actions to the services and reports their outcome to a
//! [`Renderer`]. Holds no state of its own beyond the session: which
//! controls are available is always derived from whether a token is present.

use std::sync::Arc;

use futures::StreamExt;
use serde::Serialize;

use crate::client::BlogApi;
use crate::client::models::Credentials;
use crate::error::{ApiError, Error, Result};
use crate::feed::{FeedEntry, FeedLoader};
use crate::service::{AuthService, GeneratorService};
use crate::session::SessionStore;

pub mod render;

pub use render::Renderer;

/// Status-message region, one per user-facing form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Register,
    Login,
    Generate,
}

impl Panel {
    pub fn label(self) -> &'static str {
        match self {
            Panel::Register => "register",
            Panel::Login => "login",
            Panel::Generate => "generate",
        }
    }

    fn validation_hint(self) -> &'static str {
        match self {
            Panel::Register | Panel::Login => "Please fill in all fields.",
            Panel::Generate => "Write a prompt first.",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Panel::Register => crate::client::blog::REGISTER_FAILED,
            Panel::Login => crate::client::blog::LOGIN_FAILED,
            Panel::Generate => crate::client::blog::GENERATE_FAILED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Success,
    Info,
    Error,
}

/// Short user-facing line shown in a [`Panel`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Which session-dependent controls are offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlVisibility {
    pub generate: bool,
    pub logout: bool,
}

impl ControlVisibility {
    pub fn for_session(signed_in: bool) -> Self {
        Self {
            generate: signed_in,
            logout: signed_in,
        }
    }
}

/// Binds register/login/generate/logout and the feed to a renderer
pub struct ViewController<C: ?Sized> {
    session: SessionStore,
    auth: AuthService<C>,
    generator: GeneratorService<C>,
    feed: FeedLoader<C>,
    renderer: Arc<dyn Renderer>,
}

impl<C: BlogApi + ?Sized + 'static> ViewController<C> {
    /// Build the controller and subscribe the renderer to session changes.
    ///
    /// The session should already be loaded; the renderer immediately
    /// receives the current control visibility.
    pub fn new(client: Arc<C>, mut session: SessionStore, renderer: Arc<dyn Renderer>) -> Self {
        let listener = Arc::clone(&renderer);
        session.on_change(move |signed_in| {
            listener.controls(ControlVisibility::for_session(signed_in));
        });

        Self {
            session,
            auth: AuthService::new(Arc::clone(&client)),
            generator: GeneratorService::new(Arc::clone(&client)),
            feed: FeedLoader::new(client),
            renderer,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn visibility(&self) -> ControlVisibility {
        ControlVisibility::for_session(self.session.is_signed_in())
    }

    pub async fn register(&mut self, email: &str, password: &str) -> Result<()> {
        let panel = Panel::Register;
        self.renderer.clear_status(panel);

        let message = match self.auth.register(&Credentials::new(email, password)).await {
            Ok(author) => {
                log::debug!("Registered author id {:?}", author.id);
                StatusMessage::success(format!("Registered user: {}", author.email))
            }
            Err(err) => status_for_error(panel, err)?,
        };

        self.renderer.status(panel, &message);
        Ok(())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let panel = Panel::Login;
        self.renderer.clear_status(panel);

        let credentials = Credentials::new(email, password);
        let message = match self.auth.login(&credentials, &mut self.session).await {
            Ok(_) => StatusMessage::success("Login successful."),
            Err(err) => status_for_error(panel, err)?,
        };

        self.renderer.status(panel, &message);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.renderer.clear_status(Panel::Login);
        self.session.clear()?;
        self.renderer.status(Panel::Login, &StatusMessage::info("Session closed."));
        Ok(())
    }

    /// Generate a post; on success the feed is reloaded so it shows up.
    pub async fn generate(&mut self, prompt: &str) -> Result<()> {
        let panel = Panel::Generate;
        self.renderer.clear_status(panel);

        let outcome = self.generator.generate(prompt, self.session.token()).await;
        let generated = outcome.is_ok();
        let message = match outcome {
            Ok(post) => {
                log::debug!("Generated post id {:?}", post.id);
                StatusMessage::success(format!("Post generated and saved: {}", post.title))
            }
            Err(err) => status_for_error(panel, err)?,
        };

        self.renderer.status(panel, &message);

        if generated {
            self.load_feed().await;
        }
        Ok(())
    }

    /// Discard the rendered feed and rebuild it from a fresh fetch
    pub async fn load_feed(&self) {
        self.renderer.feed_started();

        let mut entries = self.feed.load();
        while let Some(entry) = entries.next().await {
            self.renderer.feed_entry(&entry);
        }

        self.renderer.feed_finished();
    }
}

/// Turn an API failure into the panel's status line.
///
/// Only client taxonomy errors are rendered; local faults (storage, I/O)
/// propagate to the caller.
fn status_for_error(panel: Panel, err: Error) -> Result<StatusMessage> {
    let api = match err {
        Error::Api(api) => api,
        other => return Err(other),
    };

    let text = match api {
        ApiError::Validation(_) => panel.validation_hint().to_string(),
        ApiError::NotAuthenticated => "You must log in first.".to_string(),
        ApiError::Server(message) => message,
        ApiError::Network(detail) => {
            log::debug!("{} failed at transport level: {}", panel.label(), detail);
            "Network error.".to_string()
        }
        ApiError::InvalidResponse(detail) => {
            log::debug!("{} got an unreadable response: {}", panel.label(), detail);
            panel.failure_message().to_string()
        }
    };

    Ok(StatusMessage::error(text))
}

/// Feed entry text shown for the two placeholders
pub fn placeholder_text(entry: &FeedEntry) -> Option<&str> {
    match entry {
        FeedEntry::Empty => Some(crate::feed::EMPTY_FEED),
        FeedEntry::Unavailable { message } => Some(message),
        FeedEntry::Post(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockBlogClient;
    use crate::client::mock::post;
    use crate::session::{KeyValueStore, MemoryStore, TOKEN_KEY};
    use std::sync::Mutex;

    /// Everything the controller asked the renderer to do, in order
    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Clear(Panel),
        Status(Panel, StatusMessage),
        Controls(ControlVisibility),
        FeedStarted,
        Entry(FeedEntry),
        FeedFinished,
    }

    #[derive(Default)]
    struct RecordingRenderer {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingRenderer {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        fn statuses(&self) -> Vec<(Panel, StatusMessage)> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Event::Status(panel, msg) => Some((panel, msg)),
                    _ => None,
                })
                .collect()
        }

        fn entries(&self) -> Vec<FeedEntry> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    Event::Entry(entry) => Some(entry),
                    _ => None,
                })
                .collect()
        }

        fn last_controls(&self) -> Option<ControlVisibility> {
            self.events().into_iter().rev().find_map(|e| match e {
                Event::Controls(v) => Some(v),
                _ => None,
            })
        }
    }

    impl Renderer for RecordingRenderer {
        fn clear_status(&self, panel: Panel) {
            self.events.lock().unwrap().push(Event::Clear(panel));
        }

        fn status(&self, panel: Panel, message: &StatusMessage) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Status(panel, message.clone()));
        }

        fn controls(&self, visibility: ControlVisibility) {
            self.events.lock().unwrap().push(Event::Controls(visibility));
        }

        fn feed_started(&self) {
            self.events.lock().unwrap().push(Event::FeedStarted);
        }

        fn feed_entry(&self, entry: &FeedEntry) {
            self.events.lock().unwrap().push(Event::Entry(entry.clone()));
        }

        fn feed_finished(&self) {
            self.events.lock().unwrap().push(Event::FeedFinished);
        }
    }

    fn controller(
        client: MockBlogClient,
        token: Option<&str>,
    ) -> (
        ViewController<MockBlogClient>,
        Arc<MockBlogClient>,
        Arc<RecordingRenderer>,
    ) {
        let storage = Arc::new(MemoryStore::new());
        if let Some(t) = token {
            storage.set(TOKEN_KEY, t).unwrap();
        }
        let mut session = SessionStore::new(storage);
        session.load();

        let client = Arc::new(client);
        let renderer = Arc::new(RecordingRenderer::default());
        let view = ViewController::new(client.clone(), session, renderer.clone());
        (view, client, renderer)
    }

    #[tokio::test]
    async fn test_initial_visibility_follows_session() {
        let (_, _, renderer) = controller(MockBlogClient::new(), None);
        assert_eq!(
            renderer.last_controls(),
            Some(ControlVisibility::for_session(false))
        );

        let (view, _, renderer) = controller(MockBlogClient::new(), Some("tok"));
        assert_eq!(
            renderer.last_controls(),
            Some(ControlVisibility::for_session(true))
        );
        assert!(view.visibility().generate);
    }

    #[tokio::test]
    async fn test_register_clears_then_reports() {
        let (mut view, _, renderer) = controller(MockBlogClient::new(), None);

        view.register("ana@example.com", "pw").await.unwrap();

        assert_eq!(
            renderer.events(),
            vec![
                Event::Controls(ControlVisibility::for_session(false)),
                Event::Clear(Panel::Register),
                Event::Status(
                    Panel::Register,
                    StatusMessage::success("Registered user: ana@example.com")
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_register_validation_message() {
        let (mut view, client, renderer) = controller(MockBlogClient::new(), None);

        view.register("", "pw").await.unwrap();

        assert_eq!(
            renderer.statuses(),
            vec![(
                Panel::Register,
                StatusMessage::error("Please fill in all fields.")
            )]
        );
        assert_eq!(client.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_login_shows_generate_controls() {
        let (mut view, _, renderer) = controller(MockBlogClient::new(), None);

        view.login("ana@example.com", "pw").await.unwrap();

        assert_eq!(
            renderer.last_controls(),
            Some(ControlVisibility::for_session(true))
        );
        assert_eq!(
            renderer.statuses(),
            vec![(Panel::Login, StatusMessage::success("Login successful."))]
        );
    }

    #[tokio::test]
    async fn test_login_server_detail_is_shown() {
        let client = MockBlogClient::new()
            .with_error(ApiError::Server("Incorrect email or password".to_string()))
            .await;
        let (mut view, _, renderer) = controller(client, None);

        view.login("ana@example.com", "bad").await.unwrap();

        assert_eq!(
            renderer.statuses(),
            vec![(
                Panel::Login,
                StatusMessage::error("Incorrect email or password")
            )]
        );
        assert!(!view.visibility().logout);
    }

    #[tokio::test]
    async fn test_network_error_is_flat_message() {
        let client = MockBlogClient::new()
            .with_error(ApiError::Network("connection refused".to_string()))
            .await;
        let (mut view, _, renderer) = controller(client, None);

        view.login("ana@example.com", "pw").await.unwrap();

        assert_eq!(
            renderer.statuses(),
            vec![(Panel::Login, StatusMessage::error("Network error."))]
        );
    }

    #[tokio::test]
    async fn test_logout_hides_controls() {
        let (mut view, _, renderer) = controller(MockBlogClient::new(), Some("tok"));

        view.logout().unwrap();

        assert!(view.session().token().is_none());
        assert_eq!(
            renderer.last_controls(),
            Some(ControlVisibility::for_session(false))
        );
        assert_eq!(
            renderer.statuses(),
            vec![(Panel::Login, StatusMessage::info("Session closed."))]
        );
    }

    #[tokio::test]
    async fn test_generate_without_session() {
        let (mut view, client, renderer) = controller(MockBlogClient::new(), None);

        view.generate("rust").await.unwrap();

        assert_eq!(
            renderer.statuses(),
            vec![(Panel::Generate, StatusMessage::error("You must log in first."))]
        );
        assert_eq!(client.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_generate_blank_prompt() {
        let (mut view, client, renderer) = controller(MockBlogClient::new(), Some("tok"));

        view.generate("   ").await.unwrap();

        assert_eq!(
            renderer.statuses(),
            vec![(Panel::Generate, StatusMessage::error("Write a prompt first."))]
        );
        assert_eq!(client.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_generate_reloads_feed() {
        let client = MockBlogClient::new()
            .with_generated_title("Fresh Post")
            .await
            .with_posts(vec![post("Fresh Post", "Body")])
            .await;
        let (mut view, client, renderer) = controller(client, Some("tok"));

        view.generate("rust").await.unwrap();

        assert_eq!(
            renderer.statuses(),
            vec![(
                Panel::Generate,
                StatusMessage::success("Post generated and saved: Fresh Post")
            )]
        );
        assert_eq!(client.call_counts().await.list_posts, 1);
        assert_eq!(renderer.entries().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_generate_does_not_reload_feed() {
        let client = MockBlogClient::new()
            .with_error(ApiError::Server("Could not validate credentials".to_string()))
            .await;
        let (mut view, client, _) = controller(client, Some("stale"));

        view.generate("rust").await.unwrap();

        assert_eq!(client.call_counts().await.list_posts, 0);
    }

    #[tokio::test]
    async fn test_login_then_generate_uses_token() {
        let client = MockBlogClient::new().with_access_token("issued").await;
        let (mut view, client, _) = controller(client, None);

        view.login("ana@example.com", "pw").await.unwrap();
        view.generate("rust").await.unwrap();

        assert_eq!(client.captured_tokens().await, vec!["issued".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_feed_renders_one_placeholder() {
        let (view, _, renderer) = controller(MockBlogClient::new(), None);

        view.load_feed().await;

        assert_eq!(renderer.entries(), vec![FeedEntry::Empty]);
        let events = renderer.events();
        assert_eq!(events[events.len() - 3], Event::FeedStarted);
        assert_eq!(events[events.len() - 1], Event::FeedFinished);
    }

    #[test]
    fn test_placeholder_text() {
        assert_eq!(placeholder_text(&FeedEntry::Empty), Some("No posts yet."));
        assert_eq!(
            placeholder_text(&FeedEntry::Unavailable {
                message: "Failed to load posts.".to_string()
            }),
            Some("Failed to load posts.")
        );
    }
}
