//! REST client for the login endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `HttpLoginApi` reports [`ApiError::Unavailable`] since
//! logging in is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are kept distinct in [`ApiError`];
//! the auth controller is the layer that collapses them into one message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{Credentials, LoginResponse};

/// Failure reported by the login transport.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("login request failed: {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The server answered 2xx but the body was not a login response.
    #[error("malformed login response: {0}")]
    Decode(String),
    #[error("login is not available on the server")]
    Unavailable,
}

impl ApiError {
    /// Non-empty `message` supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message: Some(msg), .. } => Some(msg.trim()).filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Text describing a transport-level failure, if this is one.
    pub fn transport_message(&self) -> Option<String> {
        match self {
            Self::Transport(msg) => Some(msg.trim().to_owned()).filter(|m| !m.is_empty()),
            Self::Unavailable => Some(self.to_string()),
            Self::Rejected { .. } | Self::Decode(_) => None,
        }
    }
}

/// Network seam for the login call.
#[allow(async_fn_in_trait)]
pub trait LoginApi {
    /// Exchange credentials for a token and user profile.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] describing why no login response was obtained.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
}

/// `LoginApi` backed by `POST {api_base_url}/auth/login`.
#[derive(Clone, Debug)]
pub struct HttpLoginApi {
    endpoint: String,
}

impl HttpLoginApi {
    pub fn new(api_base_url: &str) -> Self {
        Self { endpoint: login_endpoint(api_base_url) }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LoginApi for HttpLoginApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(credentials)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(ApiError::Rejected { status, message: parse_error_message(&body) });
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }
}

fn login_endpoint(api_base_url: &str) -> String {
    format!("{}/auth/login", api_base_url.trim_end_matches('/'))
}

/// Extract `message` from an error response body, ignoring non-JSON bodies.
#[cfg(any(test, feature = "hydrate"))]
fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
