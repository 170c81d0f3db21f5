//! Browser implementations of the capture and drawing capabilities.
//!
//! This module is the only place that touches `web_sys`. Everything it
//! exposes plugs into the plain-Rust traits in [`crate::surface`] and
//! [`crate::capture`].

mod camera;
mod hands;
mod surface;

pub use camera::WebCamera;
pub use hands::{HANDS_CDN, MediaPipeHands, SettleFn, parse_results, use_webgl_backend};
pub use surface::{FrameImage, WebSurface};

use wasm_bindgen::JsValue;

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
