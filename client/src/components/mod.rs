//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `canvas_host` bridges Leptos to the imperative `canvas` engine; pages
//! compose it with their own toolbars.

pub mod canvas_host;
