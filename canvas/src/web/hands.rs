//! MediaPipe Hands binding.
//!
//! The `Hands` solution and TensorFlow.js are loaded as globals by script
//! tags in the page shell. Missing globals surface as
//! [`DetectorError::Unavailable`] instead of a panic.

use std::rc::Rc;

use js_sys::{JSON, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlVideoElement;

use super::{FrameImage, describe};
use crate::capture::{DetectionResults, DetectorError, HandDetector, HandsOptions};
use crate::gate::Ticket;
use crate::landmark::Hand;

/// Where the solution's model and wasm files are fetched from.
pub const HANDS_CDN: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/hands";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Hands)]
    type HandsJs;

    #[wasm_bindgen(constructor, js_class = "Hands", catch)]
    fn new(config: &JsValue) -> Result<HandsJs, JsValue>;

    #[wasm_bindgen(method, js_class = "Hands", js_name = setOptions, catch)]
    fn set_options(this: &HandsJs, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_class = "Hands", js_name = onResults)]
    fn on_results(this: &HandsJs, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_class = "Hands", catch)]
    fn send(this: &HandsJs, inputs: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, js_class = "Hands", catch)]
    fn close(this: &HandsJs) -> Result<Promise, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = tf, js_name = setBackend, catch)]
    fn tf_set_backend(name: &str) -> Result<Promise, JsValue>;
}

/// Select the WebGL backend for TensorFlow.js before the detector starts.
///
/// # Errors
///
/// Returns `Err` if TensorFlow.js is not loaded or the backend is refused.
pub async fn use_webgl_backend() -> Result<(), DetectorError> {
    let promise = tf_set_backend("webgl").map_err(|e| DetectorError::Unavailable(describe(&e)))?;
    let accepted = JsFuture::from(promise).await.map_err(|e| DetectorError::Unavailable(describe(&e)))?;
    if accepted.as_bool() == Some(false) {
        return Err(DetectorError::Unavailable("webgl backend refused".to_owned()));
    }
    Ok(())
}

/// Called when a submission settles, with the ticket it was sent under.
pub type SettleFn = Rc<dyn Fn(Ticket, Result<(), DetectorError>)>;

pub struct MediaPipeHands {
    inner: HandsJs,
    locate: Option<Closure<dyn Fn(String) -> String>>,
    results: Option<Closure<dyn FnMut(JsValue)>>,
    on_settle: SettleFn,
    closed: bool,
}

impl MediaPipeHands {
    /// Construct the detector and register `on_results` as its callback.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the `Hands` global is missing or its constructor throws.
    pub fn new(on_results: impl FnMut(JsValue) + 'static, on_settle: SettleFn) -> Result<Self, DetectorError> {
        let locate = Closure::wrap(Box::new(|file: String| format!("{HANDS_CDN}/{file}")) as Box<dyn Fn(String) -> String>);
        let config = Object::new();
        Reflect::set(&config, &JsValue::from_str("locateFile"), locate.as_ref())
            .map_err(|e| DetectorError::Unavailable(describe(&e)))?;

        let inner = HandsJs::new(&config).map_err(|e| DetectorError::Unavailable(describe(&e)))?;
        let results = Closure::wrap(Box::new(on_results) as Box<dyn FnMut(JsValue)>);
        inner.on_results(results.as_ref().unchecked_ref());

        Ok(Self { inner, locate: Some(locate), results: Some(results), on_settle, closed: false })
    }
}

impl HandDetector for MediaPipeHands {
    type Frame = HtmlVideoElement;

    fn configure(&mut self, options: &HandsOptions) -> Result<(), DetectorError> {
        let json = serde_json::to_string(options).map_err(|e| DetectorError::Configure(e.to_string()))?;
        let value = JSON::parse(&json).map_err(|e| DetectorError::Configure(describe(&e)))?;
        self.inner.set_options(&value).map_err(|e| DetectorError::Configure(describe(&e)))
    }

    fn send(&mut self, frame: &HtmlVideoElement, ticket: Ticket) -> Result<(), DetectorError> {
        if self.closed {
            return Err(DetectorError::Closed);
        }
        let inputs = Object::new();
        Reflect::set(&inputs, &JsValue::from_str("image"), frame).map_err(|e| DetectorError::Rejected(describe(&e)))?;
        let promise = self.inner.send(&inputs).map_err(|e| DetectorError::Rejected(describe(&e)))?;

        let settle = Rc::clone(&self.on_settle);
        spawn_local(async move {
            let outcome = JsFuture::from(promise).await.map(|_| ()).map_err(|e| DetectorError::Rejected(describe(&e)));
            settle(ticket, outcome);
        });
        Ok(())
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        // Callbacks stay alive until the close settles; MediaPipe may still
        // fire a queued result.
        let locate = self.locate.take();
        let results = self.results.take();
        // Close failures are dropped along with the callbacks; the detector
        // is already unusable either way.
        match self.inner.close() {
            Ok(promise) => spawn_local(async move {
                let outcome = JsFuture::from(promise).await;
                drop((outcome, locate, results));
            }),
            Err(e) => drop((e, locate, results)),
        }
    }
}

impl Drop for MediaPipeHands {
    fn drop(&mut self) {
        self.close();
    }
}

/// Decode a MediaPipe results object.
///
/// Malformed landmark data yields no hands rather than an error; the frame
/// is still painted.
#[must_use]
pub fn parse_results(value: &JsValue) -> DetectionResults<FrameImage> {
    let image = match Reflect::get(value, &JsValue::from_str("image")) {
        Ok(image) if !image.is_undefined() && !image.is_null() => FrameImage::from_js(image),
        _ => None,
    };
    DetectionResults::new(image, parse_hands(value))
}

fn parse_hands(value: &JsValue) -> Vec<Hand> {
    let Ok(raw) = Reflect::get(value, &JsValue::from_str("multiHandLandmarks")) else {
        return Vec::new();
    };
    if !raw.is_object() {
        return Vec::new();
    }
    let Ok(json) = JSON::stringify(&raw).map(String::from) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Hand>>(&json) {
        Ok(hands) => hands,
        Err(_) => Vec::new(),
    }
}
