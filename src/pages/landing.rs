//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::use_session_store;

/// Marketing hero with a call to action that depends on the session.
#[component]
pub fn LandingPage() -> impl IntoView {
    let store = use_session_store();

    let cta = move || {
        if store.is_authenticated() {
            view! { <a href="/dashboard" class="btn btn--primary">"Go to dashboard"</a> }.into_any()
        } else {
            view! { <a href="/login" class="btn btn--primary">"Sign in"</a> }.into_any()
        }
    };

    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"Campus"</h1>
                <p>"Take your tests, collect your certificates, and answer invitations in one place."</p>
                {cta}
            </header>
        </div>
    }
}
