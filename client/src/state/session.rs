//! Session-token storage for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the token, the dashboard reads it before fetching the
//! profile, and logout/invalid-session paths delete it. All access goes through
//! [`SessionContext`], provided once by the app root.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// Browser storage key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Read / write / delete access to the session token.
pub trait SessionStore {
    /// The stored token, if any. Empty values count as absent.
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: &str);

    fn clear(&self);
}

/// In-process store used during SSR and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
            .filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// `localStorage`-backed store.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for BrowserSessionStore {
    fn token(&self) -> Option<String> {
        Self::storage()
            .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
            .filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(TOKEN_KEY).is_err() {
                log::warn!("failed to remove session token");
            }
        }
    }
}

/// Shared handle to the session store, provided through Leptos context.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore + Send + Sync>,
}

impl SessionContext {
    pub fn new(store: impl SessionStore + Send + Sync + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Store matching the build: `localStorage` in the browser, memory on the server.
    #[must_use]
    pub fn for_platform() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(BrowserSessionStore)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(MemorySessionStore::default())
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) {
        self.store.set_token(token);
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}

impl SessionStore for SessionContext {
    fn token(&self) -> Option<String> {
        self.store.token()
    }

    fn set_token(&self, token: &str) {
        self.store.set_token(token);
    }

    fn clear(&self) {
        self.store.clear();
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").field("has_token", &self.has_token()).finish()
    }
}
