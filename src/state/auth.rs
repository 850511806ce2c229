//! Auth-session controller and its context provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` wraps the routed app and owns the [`SessionStore`] plus the
//! in-flight login counter. Pages call [`use_auth`] to get an
//! [`AuthController`], which performs the login call and reconciles its
//! outcome into store transitions.
//!
//! ERROR HANDLING
//! ==============
//! `login` never panics and never surfaces transport errors: every failure
//! becomes a [`LoginFailure`] carrying a display message, and the store is
//! left untouched. Reading the context outside `AuthProvider` is a setup bug
//! and panics immediately.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::session::SessionStore;
use crate::config::{ClientConfig, use_client_config};
use crate::net::api::{ApiError, HttpLoginApi, LoginApi};
use crate::net::types::{Credentials, LoginResponse, StoredSession, UserProfile};
use crate::util::session_storage::{BrowserSessionStorage, SessionStorage};

/// Message used when neither the server nor the transport explains a failure.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please try again.";

const MISSING_PROVIDER: &str = "use_auth must be used within an AuthProvider";

/// The one failure `login` reports.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LoginFailure {
    pub message: String,
}

impl LoginFailure {
    /// Prefer the server's message, then the transport's, then the fallback.
    pub fn from_api_error(err: &ApiError) -> Self {
        let message = err
            .server_message()
            .map(str::to_owned)
            .or_else(|| err.transport_message())
            .unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_owned());
        Self { message }
    }
}

/// Reactive handles shared through context by `AuthProvider`.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    store: SessionStore,
    in_flight: RwSignal<u32>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            store: SessionStore::new(),
            in_flight: RwSignal::new(0),
        }
    }

    pub fn store(&self) -> SessionStore {
        self.store
    }

    /// True while the stored-session lookup or any login call is outstanding.
    pub fn loading(&self) -> bool {
        self.store.is_initializing() || self.in_flight.get() > 0
    }

    /// [`AuthContext::loading`] as a derived signal for views.
    pub fn loading_signal(&self) -> Signal<bool> {
        let ctx = *self;
        Signal::derive(move || ctx.loading())
    }
}

/// Counts one outstanding login; released on drop so a cancelled login
/// future also clears `loading`.
struct InFlight(RwSignal<u32>);

impl InFlight {
    fn begin(counter: RwSignal<u32>) -> Self {
        counter.update(|n| *n += 1);
        Self(counter)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let _ = self.0.try_update(|n| *n = n.saturating_sub(1));
    }
}

/// Login/logout operations over the shared session.
pub struct AuthController<A> {
    ctx: AuthContext,
    api: Rc<A>,
    navigate: Rc<dyn Fn(&str)>,
    login_path: String,
    storage: Rc<dyn SessionStorage>,
}

impl<A> Clone for AuthController<A> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx,
            api: Rc::clone(&self.api),
            navigate: Rc::clone(&self.navigate),
            login_path: self.login_path.clone(),
            storage: Rc::clone(&self.storage),
        }
    }
}

impl<A: LoginApi> AuthController<A> {
    pub fn new(ctx: AuthContext, api: Rc<A>, config: &ClientConfig, navigate: impl Fn(&str) + 'static) -> Self {
        Self {
            ctx,
            api,
            navigate: Rc::new(navigate),
            login_path: config.login_path.clone(),
            storage: Rc::new(BrowserSessionStorage::new(config.storage_key.clone())),
        }
    }

    /// Replace where the session is persisted.
    #[must_use]
    pub fn with_storage(mut self, storage: Rc<dyn SessionStorage>) -> Self {
        self.storage = storage;
        self
    }

    pub fn store(&self) -> SessionStore {
        self.ctx.store
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.ctx.store.user()
    }

    pub fn loading(&self) -> bool {
        self.ctx.loading()
    }

    pub fn loading_signal(&self) -> Signal<bool> {
        self.ctx.loading_signal()
    }

    /// Log in with an email and password.
    ///
    /// On success the store holds the returned user and token before this
    /// returns. Concurrent calls are not coordinated; the last one to settle
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginFailure`] for any network, credential, or server
    /// failure. The store is not modified in that case.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<(), LoginFailure> {
        let credentials = Credentials::new(identifier, secret);
        let _in_flight = InFlight::begin(self.ctx.in_flight);

        match self.api.login(&credentials).await {
            Ok(LoginResponse { token, .. }) if token.trim().is_empty() => {
                let err = ApiError::Decode("login response carried a blank token".to_owned());
                log::warn!("login failed: {err}");
                Err(LoginFailure::from_api_error(&err))
            }
            Ok(LoginResponse { token, user }) => {
                self.storage.save(&StoredSession { token: token.clone(), user: user.clone() });
                self.ctx.store.set_credentials(user, token);
                log::info!("login succeeded");
                Ok(())
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                Err(LoginFailure::from_api_error(&err))
            }
        }
    }

    /// Clear the session and go to the login page.
    pub fn logout(&self) {
        self.ctx.store.logout();
        self.storage.clear();
        log::info!("logged out");
        (self.navigate)(&self.login_path);
    }
}

/// Owns the session for everything rendered inside it.
///
/// Starts in the initializing state and resolves it from browser storage once
/// hydrated.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let storage = BrowserSessionStorage::new(use_client_config().storage_key);
    let ctx = AuthContext::new();
    provide_context(ctx);

    // Effects only run in the browser, so SSR output renders as loading.
    Effect::new(move |_| {
        ctx.store().finish_initialization(storage.load());
    });

    children()
}

/// The auth context provided by the nearest `AuthProvider`.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider`.
pub fn use_auth_context() -> AuthContext {
    use_context::<AuthContext>().expect(MISSING_PROVIDER)
}

/// The session store provided by the nearest `AuthProvider`.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider`.
pub fn use_session_store() -> SessionStore {
    use_auth_context().store()
}

/// Controller bound to the HTTP login API and the router.
///
/// # Panics
///
/// Panics when called outside an `AuthProvider`.
pub fn use_auth() -> AuthController<HttpLoginApi> {
    let ctx = use_auth_context();
    let config = use_client_config();
    let navigate = use_navigate();
    AuthController::new(
        ctx,
        Rc::new(HttpLoginApi::new(&config.api_base_url)),
        &config,
        move |path: &str| navigate(path, NavigateOptions::default()),
    )
}
