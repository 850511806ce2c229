//! Persisted session in `localStorage`.
//!
//! Holds the token and user returned by the last successful login so a page
//! reload can restore the session. Requires a browser environment; on the
//! server every read misses and every write is a no-op.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use crate::net::types::StoredSession;

/// Where the auth controller keeps the session between page loads.
pub trait SessionStorage {
    fn load(&self) -> Option<StoredSession>;
    fn save(&self, session: &StoredSession);
    fn clear(&self);
}

/// [`SessionStorage`] over `localStorage[key]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserSessionStorage {
    key: String,
}

impl BrowserSessionStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStorage for BrowserSessionStorage {
    fn load(&self) -> Option<StoredSession> {
        load(&self.key)
    }

    fn save(&self, session: &StoredSession) {
        save(&self.key, session);
    }

    fn clear(&self) {
        clear(&self.key);
    }
}

/// Read the stored session under `key`, if one exists and parses.
pub fn load(key: &str) -> Option<StoredSession> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(key).ok().flatten()?;
        let stored = decode(&raw);
        if stored.is_none() {
            log::warn!("discarding unreadable stored session under {key}");
            let _ = storage.remove_item(key);
        }
        stored
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Persist `session` under `key`.
pub fn save(key: &str, session: &StoredSession) {
    #[cfg(feature = "hydrate")]
    {
        let Some(raw) = encode(session) else {
            return;
        };
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if storage.set_item(key, &raw).is_err() {
                log::warn!("failed to persist session under {key}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, session);
    }
}

/// Remove any stored session under `key`.
pub fn clear(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn encode(session: &StoredSession) -> Option<String> {
    serde_json::to_string(session).ok()
}

/// Parse a stored session; blank tokens count as no session.
#[cfg(any(test, feature = "hydrate"))]
fn decode(raw: &str) -> Option<StoredSession> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()
        .filter(|s| !s.token.trim().is_empty())
}
