//! Session store
//!
//! Holds the opaque bearer token for the single signed-in user, mirrored into
//! durable storage so it survives restarts. `load`, `set` and `clear` are the
//! only ways to change it, and every change is announced to the registered
//! listeners so dependent views can refresh.

use std::sync::Arc;

use crate::error::Result;

pub mod storage;

#[cfg(test)]
pub use storage::MemoryStore;
pub use storage::{FileStore, KeyValueStore};

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "access_token";

type Listener = Box<dyn Fn(bool) + Send + Sync>;

/// Bearer-token session backed by a [`KeyValueStore`]
pub struct SessionStore {
    token: Option<String>,
    storage: Arc<dyn KeyValueStore>,
    listeners: Vec<Listener>,
}

impl SessionStore {
    /// Create an empty session over `storage`; call [`load`](Self::load) to
    /// recover a persisted token.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            token: None,
            storage,
            listeners: Vec::new(),
        }
    }

    /// Recover the persisted token.
    ///
    /// Absence is the normal cold-start state. An unreadable store is treated
    /// the same way and only logged.
    pub fn load(&mut self) -> Option<&str> {
        self.token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("Could not read stored session, starting signed out: {}", e);
                None
            }
        };
        log::debug!("Session loaded (signed in: {})", self.token.is_some());
        self.notify();
        self.token.as_deref()
    }

    /// Install a freshly issued token in memory and in durable storage
    pub fn set(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        self.storage.set(TOKEN_KEY, &token)?;
        self.token = Some(token);
        log::debug!("Session token stored");
        self.notify();
        Ok(())
    }

    /// Drop the token from memory and durable storage
    ///
    /// On a storage failure the in-memory token is kept.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.token = None;
        log::debug!("Session cleared");
        self.notify();
        Ok(())
    }

    /// Current bearer token, if signed in
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Register a callback invoked with the signed-in flag after every
    /// mutation. It is also invoked once immediately with the current state.
    pub fn on_change(&mut self, listener: impl Fn(bool) + Send + Sync + 'static) {
        listener(self.is_signed_in());
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self) {
        let signed_in = self.is_signed_in();
        for listener in &self.listeners {
            listener(signed_in);
        }
    }
}
