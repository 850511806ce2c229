//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created by `AuthProvider` and shared through context.
//! Route guards and user-aware components read it; only the auth controller
//! writes it.
//!
//! DESIGN
//! ======
//! The reactive signal is wrapped in a newtype so the only mutations are the
//! named transitions below. Each transition keeps `is_authenticated` equal to
//! "user and token are both present".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{StoredSession, UserProfile};

/// Snapshot of the authentication session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    user: Option<UserProfile>,
    token: Option<String>,
    is_authenticated: bool,
    is_initializing: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            is_authenticated: false,
            is_initializing: true,
        }
    }
}

impl Session {
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// True until the stored-session lookup has resolved.
    pub fn is_initializing(&self) -> bool {
        self.is_initializing
    }

    fn apply_credentials(&mut self, user: UserProfile, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
        self.is_initializing = false;
    }

    /// Returns whether anything changed.
    fn clear(&mut self) -> bool {
        let changed = self.user.is_some() || self.token.is_some() || self.is_authenticated || self.is_initializing;
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.is_initializing = false;
        changed
    }

    /// Returns whether anything changed.
    fn resolve_initialization(&mut self, restored: Option<StoredSession>) -> bool {
        if !self.is_initializing {
            return false;
        }
        match restored {
            Some(stored) => self.apply_credentials(stored.user, stored.token),
            None => self.is_initializing = false,
        }
        true
    }
}

/// Process-wide session state, mutated only through its transitions.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore(RwSignal<Session>);

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// New store in the unauthenticated, initializing state.
    pub fn new() -> Self {
        Self(RwSignal::new(Session::default()))
    }

    /// Current session (tracked).
    pub fn session(&self) -> Session {
        self.0.get()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.0.with(|s| s.user.clone())
    }

    #[cfg(test)]
    pub(crate) fn token(&self) -> Option<String> {
        self.0.with(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.with(Session::is_authenticated)
    }

    pub fn is_initializing(&self) -> bool {
        self.0.with(Session::is_initializing)
    }

    /// Record a logged-in user and token. Trusts the caller.
    pub fn set_credentials(&self, user: UserProfile, token: String) {
        self.0.update(|s| s.apply_credentials(user, token));
    }

    /// Forget the user and token. Idempotent.
    pub fn logout(&self) {
        self.0.maybe_update(Session::clear);
    }

    /// Resolve the startup lookup of a persisted session.
    ///
    /// Only the first call has any effect, so a late storage read cannot
    /// overwrite a login or logout that already happened.
    pub fn finish_initialization(&self, restored: Option<StoredSession>) {
        self.0.maybe_update(|s| s.resolve_initialization(restored));
    }
}
