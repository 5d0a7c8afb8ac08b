//! Signed-in session shared through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root provides one `RwSignal<SessionState>`. It is hydrated from
//! `localStorage` after mount and written back by a single effect, so pages
//! mutate the signal and never touch storage directly. The idle monitor's
//! last-activity stamp is the exception: it changes on every pointer event
//! and lives only in storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::StoredSession;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub username: Option<String>,
    /// Failed sign-in attempts since the last success.
    pub login_attempts: u32,
    /// False until storage has been read. Guards must wait for it.
    pub loaded: bool,
}

impl SessionState {
    pub fn from_stored(stored: StoredSession) -> Self {
        Self {
            token: stored.token,
            username: stored.username,
            login_attempts: stored.login_attempts,
            loaded: true,
        }
    }

    pub fn to_stored(&self) -> StoredSession {
        StoredSession {
            token: self.token.clone(),
            username: self.username.clone(),
            login_attempts: self.login_attempts,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some() && self.username.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn username_or_empty(&self) -> String {
        self.username.clone().unwrap_or_default()
    }

    pub fn sign_in(&mut self, token: String, username: &str) {
        self.token = Some(token);
        self.username = Some(username.to_owned());
        self.login_attempts = 0;
    }

    /// Remember who is changing an expired password, without a token.
    pub fn remember_username(&mut self, username: &str) {
        self.username = Some(username.to_owned());
    }

    pub fn record_failed_attempt(&mut self) {
        self.login_attempts = self.login_attempts.saturating_add(1);
    }

    pub fn clear_credentials(&mut self) {
        self.token = None;
        self.username = None;
    }
}
