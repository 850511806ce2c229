//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthContext;

/// Whether a guarded page should bounce to the login page.
pub fn should_redirect_unauth(loading: bool, authenticated: bool) -> bool {
    !loading && !authenticated
}

/// Redirect to `login_path` whenever auth has settled and nobody is logged in.
pub fn install_unauth_redirect<F>(auth: AuthContext, login_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(auth.loading(), auth.store().is_authenticated()) {
            navigate(&login_path, NavigateOptions::default());
        }
    });
}
