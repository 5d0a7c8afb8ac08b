//! Browser-local persistence for the session.
//!
//! DESIGN
//! ======
//! Four keys survive page reloads: the bearer token, the username, the failed
//! login counter, and the last-activity timestamp. Access goes through the
//! [`KeyValueStore`] trait so the session and idle logic can be tested against
//! [`MemoryStore`] while the app uses `localStorage` via [`LocalStore`].
//!
//! TRADE-OFFS
//! ==========
//! `localStorage` failures (private mode, quota) are swallowed. A lost write
//! only means the user signs in again.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const LOGIN_ATTEMPTS_KEY: &str = "login_attempts";
pub const LAST_ACTIVITY_KEY: &str = "last_activity";

/// String key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// `window.localStorage`. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Values read back from storage at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub username: Option<String>,
    pub login_attempts: u32,
}

/// Typed access to the session keys.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Empty strings count as absent. A corrupt counter reads as zero.
    pub fn load(&self) -> StoredSession {
        let non_empty = |key: &str| self.store.get(key).filter(|v| !v.is_empty());
        StoredSession {
            token: non_empty(TOKEN_KEY),
            username: non_empty(USERNAME_KEY),
            login_attempts: self
                .store
                .get(LOGIN_ATTEMPTS_KEY)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
        }
    }

    pub fn save(&mut self, session: &StoredSession) {
        match &session.token {
            Some(token) => self.store.set(TOKEN_KEY, token),
            None => self.store.remove(TOKEN_KEY),
        }
        match &session.username {
            Some(username) => self.store.set(USERNAME_KEY, username),
            None => self.store.remove(USERNAME_KEY),
        }
        self.store.set(LOGIN_ATTEMPTS_KEY, &session.login_attempts.to_string());
    }

    /// Drop the token, username, and activity stamp. The attempt counter
    /// survives so a logout cannot reset CAPTCHA gating.
    pub fn clear_credentials(&mut self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USERNAME_KEY);
        self.store.remove(LAST_ACTIVITY_KEY);
    }

    pub fn record_activity(&mut self, now_ms: i64) {
        self.store.set(LAST_ACTIVITY_KEY, &now_ms.to_string());
    }

    pub fn last_activity(&self) -> Option<i64> {
        self.store.get(LAST_ACTIVITY_KEY).and_then(|v| v.trim().parse().ok())
    }
}

/// Session store backed by `localStorage`.
pub fn browser_session() -> SessionStore<LocalStore> {
    SessionStore::new(LocalStore)
}
