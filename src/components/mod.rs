//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and read shared state from Leptos
//! context providers.

pub mod icon;
pub mod summary_card;
