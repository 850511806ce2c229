//! Browser-side helpers shared by pages and state.

pub mod auth;
pub mod session_storage;
