//! Student dashboard with section summaries and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::icon::{Icon, IconKind};
use crate::components::summary_card::SummaryCard;
use crate::config::use_client_config;
use crate::state::auth::{use_auth, use_auth_context};
use crate::util::auth::install_unauth_redirect;

/// Static counts shown until the sections are backed by the API.
const SUMMARY: [(IconKind, u32, &str); 3] = [
    (IconKind::Test, 3, "upcoming"),
    (IconKind::Certificate, 2, "earned"),
    (IconKind::Invitation, 1, "pending"),
];

/// Dashboard page. Redirects to the login page when nobody is logged in.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_auth_context();
    let login_path = use_client_config().login_path;
    install_unauth_redirect(ctx, login_path, use_navigate());

    let auth = StoredValue::new_local(use_auth());
    let store = ctx.store();

    let greeting = move || {
        store
            .user()
            .map(|u| format!("Welcome back, {}", u.display_name()))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <Show
                when=move || store.is_authenticated()
                fallback=|| view! { <p class="dashboard-page__loading">"Loading..."</p> }
            >
                <header class="dashboard-page__header">
                    <h1>{greeting}</h1>
                    <button
                        class="btn dashboard-page__logout"
                        title="Log out"
                        on:click=move |_| auth.with_value(|a| a.logout())
                    >
                        <Icon kind=IconKind::Logout/>
                        "Log out"
                    </button>
                </header>
                <div class="dashboard-page__cards">
                    {SUMMARY
                        .into_iter()
                        .map(|(kind, count, caption)| view! { <SummaryCard kind=kind count=count caption=caption/> })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
