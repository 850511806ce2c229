//! Client and server configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ClientConfig` is compiled into the WASM bundle and provided as context by
//! the root component. `ServerConfig` is read from the environment by the SSR
//! binary at startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::use_context;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_STORAGE_KEY: &str = "campus_web_session";
pub const DEFAULT_PORT: u16 = 3000;

/// Browser-side settings for the auth flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for REST endpoints (no trailing slash).
    pub api_base_url: String,
    /// Route the user lands on after logout or when unauthenticated.
    pub login_path: String,
    /// Route the login page navigates to after a successful login.
    pub home_path: String,
    /// `localStorage` key holding the persisted session.
    pub storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            login_path: "/login".to_owned(),
            home_path: "/dashboard".to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build the config, honoring a `CAMPUS_API_BASE_URL` set at compile time.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("CAMPUS_API_BASE_URL"))
    }

    fn with_api_base(raw: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = raw.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base_url = base.trim_end_matches('/').to_owned();
        }
        config
    }
}

/// The `ClientConfig` provided by `App`, or the build-time config when
/// rendered without it.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_build_env)
}

/// Errors raised while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Settings for the SSR server binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Read `PORT` and `SITE_ROOT` from the environment.
    ///
    /// Both are optional; absent values defer to `[package.metadata.leptos]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            site_root: std::env::var("SITE_ROOT").ok().filter(|s| !s.trim().is_empty()),
        })
    }
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidPort(value.to_owned())),
    }
}
