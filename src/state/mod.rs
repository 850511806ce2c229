//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the store and its transitions; `auth` owns the controller
//! and the provider that shares the store through context.

pub mod auth;
pub mod session;
