//! # client
//!
//! Leptos + WASM frontend for the gesture canvas.
//!
//! This crate contains the pages (draw, login, register, dashboard), the
//! session context, REST helpers and the `CanvasHost` bridge that drives the
//! `canvas` crate's webcam hand-tracking engine.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and the panic hook, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
