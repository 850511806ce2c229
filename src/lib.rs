//! # campus-web
//!
//! Leptos + WASM frontend for the student portal: landing page, login, and the
//! student dashboard.
//!
//! This crate contains pages, components, application state, and the network
//! layer for the login API. The session flow lives in [`state::session`]
//! (the store) and [`state::auth`] (the controller and its provider).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
