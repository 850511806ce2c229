//! Networking modules for the REST login API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login call behind the `LoginApi` seam and `types`
//! defines the wire schema shared with the backend.

pub mod api;
pub mod types;
