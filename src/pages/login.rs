//! Login page with an email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::use_client_config;
use crate::state::auth::use_auth;

/// Login form. Shows the failure message from the last attempt and moves to
/// the dashboard once logged in.
#[component]
pub fn LoginPage() -> impl IntoView {
    let controller = use_auth();
    let loading = controller.loading_signal();
    let auth = StoredValue::new_local(controller);
    let home_path = use_client_config().home_path;
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let auth = auth.get_value();
        let navigate = navigate.clone();
        let home_path = home_path.clone();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        error.set(None);

        leptos::task::spawn_local(async move {
            match auth.login(&email_value, &password_value).await {
                Ok(()) => {
                    password.set(String::new());
                    navigate(&home_path, NavigateOptions::default());
                }
                Err(failure) => error.set(Some(failure.message)),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="login-page__error" role="alert">{msg}</p> })}
                <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
