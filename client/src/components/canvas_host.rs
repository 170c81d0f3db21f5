//! Bridge component between Leptos and the imperative `canvas::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! On hydration the host starts the webcam into a hidden `<video>`, selects
//! the WebGL inference backend, creates the MediaPipe Hands detector and
//! hands all of it to an `Engine`. An animation-frame loop then ticks the
//! engine once per frame; detector callbacks paint the canvas.
//!
//! LIFECYCLE
//! =========
//! `on_cleanup` clears an alive flag. The next animation frame sees it,
//! shuts the engine down (detector closed, camera released) and stops
//! rescheduling. Detector callbacks arriving later find no engine.

use leptos::prelude::*;

use crate::state::sketch::SketchState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::{Rc, Weak};
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use canvas::capture::{LoopConfig, TickOutcome};
#[cfg(feature = "hydrate")]
use canvas::engine::Engine;
#[cfg(feature = "hydrate")]
use canvas::geom::Point;
#[cfg(feature = "hydrate")]
use canvas::web::{MediaPipeHands, SettleFn, WebCamera, WebSurface};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::net::types::StrokePoint;

#[cfg(feature = "hydrate")]
type EngineSlot = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "hydrate")]
fn with_engine(slot: &Weak<RefCell<Option<Engine>>>, f: impl FnOnce(&mut Engine)) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        log::warn!("engine busy; dropping detector event");
        return;
    };
    if let Some(engine) = guard.as_mut() {
        f(engine);
    }
}

#[cfg(feature = "hydrate")]
fn detector_for(slot: &EngineSlot) -> Option<MediaPipeHands> {
    let results_slot = Rc::downgrade(slot);
    let on_results = move |results: JsValue| {
        with_engine(&results_slot, |engine| {
            if let Some(Err(e)) = engine.on_results(&results) {
                log::warn!("frame paint failed: {e}");
            }
        });
    };
    let settle_slot = Rc::downgrade(slot);
    let on_settle: SettleFn = Rc::new(move |ticket, outcome| {
        if let Err(e) = &outcome {
            log::warn!("hand detection failed: {e}");
        }
        with_engine(&settle_slot, |engine| {
            engine.settle(ticket, outcome);
        });
    });
    match MediaPipeHands::new(on_results, on_settle) {
        Ok(hands) => Some(hands),
        Err(e) => {
            log::warn!("hand detector unavailable: {e}");
            None
        }
    }
}

/// Tick the engine every animation frame until the host unmounts.
#[cfg(feature = "hydrate")]
fn start_frame_loop(slot: EngineSlot, alive: Arc<AtomicBool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            if let Some(mut engine) = slot.borrow_mut().take() {
                engine.shutdown();
                log::debug!("sketch engine shut down: {:?}", engine.stats());
            }
            // Drops this closure; nothing runs after it.
            holder_for_cb.borrow_mut().take();
            return;
        }
        if let Ok(mut guard) = slot.try_borrow_mut() {
            if let Some(engine) = guard.as_mut() {
                if let TickOutcome::Failed(e) = engine.tick() {
                    log::warn!("frame submission failed: {e}");
                }
            }
        }
        request_frame(&window_for_cb, &holder_for_cb);
    }) as Box<dyn FnMut(f64)>);
    *holder.borrow_mut() = Some(cb);
    request_frame(&window, &holder);
}

#[cfg(feature = "hydrate")]
fn request_frame(window: &web_sys::Window, holder: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    if let Some(cb) = holder.borrow().as_ref() {
        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_err() {
            log::warn!("requestAnimationFrame failed; sketch loop stopped");
        }
    }
}

#[cfg(feature = "hydrate")]
async fn mount_engine(
    slot: EngineSlot,
    alive: Arc<AtomicBool>,
    canvas: web_sys::HtmlCanvasElement,
    video: web_sys::HtmlVideoElement,
) {
    if let Err(e) = canvas::web::use_webgl_backend().await {
        log::warn!("webgl backend not selected: {e}");
    }
    let camera = match WebCamera::start(video).await {
        Ok(camera) => camera,
        Err(e) => {
            log::warn!("camera unavailable: {e}");
            return;
        }
    };
    if !alive.load(Ordering::Relaxed) {
        return;
    }
    let surface = match WebSurface::new(canvas) {
        Ok(surface) => surface,
        Err(e) => {
            log::warn!("canvas unavailable: {e}");
            return;
        }
    };

    let mut engine = Engine::new(surface, camera, LoopConfig::default());
    if let Some(hands) = detector_for(&slot) {
        if let Err(e) = engine.attach_detector(hands) {
            log::warn!("hand detector not attached: {e}");
        }
    }
    *slot.borrow_mut() = Some(engine);
    start_frame_loop(slot, alive);
}

#[cfg(feature = "hydrate")]
fn to_canvas_points(points: &[StrokePoint]) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.x, p.y)).collect()
}

/// Webcam canvas with the hand-tracking overlay and a "Perfect it" action.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let sketch = expect_context::<RwSignal<SketchState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let video_ref = NodeRef::<leptos::html::Video>::new();

    #[cfg(feature = "hydrate")]
    let engine: EngineSlot = Rc::new(RefCell::new(None));

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let alive = Arc::new(AtomicBool::new(true));
        let alive_mount = alive.clone();
        let mounted = Rc::new(std::cell::Cell::new(false));
        Effect::new(move || {
            let (Some(canvas), Some(video)) = (canvas_ref.get(), video_ref.get()) else {
                return;
            };
            if mounted.replace(true) {
                return;
            }
            leptos::task::spawn_local(mount_engine(Rc::clone(&engine), alive_mount.clone(), canvas, video));
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_perfect = {
        #[cfg(feature = "hydrate")]
        let engine = Rc::clone(&engine);
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let points: Vec<StrokePoint> = engine
                    .borrow()
                    .as_ref()
                    .map(|e| e.stroke_points().iter().map(|p| StrokePoint { x: p.x, y: p.y }).collect())
                    .unwrap_or_default();
                if !sketch.get_untracked().can_submit(points.len()) {
                    return;
                }
                sketch.update(SketchState::begin);
                let engine = Rc::downgrade(&engine);
                leptos::task::spawn_local(async move {
                    let outcome = crate::net::api::perfect_drawing(points).await;
                    if let Ok(result) = &outcome {
                        let overlay = to_canvas_points(&result.smoothed_points);
                        with_engine(&engine, |e| e.set_overlay(Some(overlay)));
                    }
                    sketch.update(|s| s.finish(outcome));
                });
            }
        }
    };

    view! {
        <div class="canvas-host">
            <video class="canvas-host__video" node_ref=video_ref autoplay=true playsinline=true muted=true></video>
            <canvas class="canvas-host__canvas" node_ref=canvas_ref width="640" height="480"></canvas>
            <div class="canvas-host__actions">
                <button class="btn" on:click=on_perfect disabled=move || sketch.get().pending>
                    "Perfect it"
                </button>
            </div>
        </div>
    }
}
