use wasm_bindgen::JsValue;

use crate::capture::{CaptureLoop, DetectionResults, DetectorError, FrameSource, LoopConfig, LoopStats, TickOutcome};
use crate::gate::Ticket;
use crate::geom::Point;
use crate::render::{self, RenderStyle};
use crate::stroke::StrokeHistory;
use crate::surface::{Surface, SurfaceError};
use crate::web::{self, MediaPipeHands, WebCamera, WebSurface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What one results callback painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSummary {
    /// Hands present in the callback.
    pub hands: usize,
    /// Fingertip points appended to the stroke history.
    pub points_added: usize,
    /// Whether the camera frame was composited.
    pub image_drawn: bool,
}

/// Core sketch state: everything that doesn't depend on browser objects.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct SketchCore {
    pub history: StrokeHistory,
    pub style: RenderStyle,
    overlay: Option<Vec<Point>>,
}

impl SketchCore {
    #[must_use]
    pub fn new(history: StrokeHistory, style: RenderStyle) -> Self {
        Self { history, style, overlay: None }
    }

    /// Paint one detector callback and extend the stroke history.
    ///
    /// Clears the surface, draws the mirrored frame, then for each hand the
    /// skeleton and fingertip marker, appending the fingertip to history.
    /// Finally the full stroke and any recognized-shape overlay are drawn.
    /// A frame image that cannot be drawn yet is skipped, not fatal.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a surface call other than the frame image fails.
    pub fn on_results<S: Surface>(
        &mut self,
        surface: &mut S,
        results: &DetectionResults<S::Image>,
    ) -> Result<FrameSummary, SurfaceError> {
        let mut summary = FrameSummary::default();
        render::begin_mirrored(surface)?;

        if let Some(image) = &results.image {
            summary.image_drawn = render::draw_frame_image(surface, image).is_ok();
        }

        let (width, height) = surface.size();
        for hand in &results.multi_hand_landmarks {
            summary.hands += 1;
            render::draw_skeleton(surface, hand, &self.style)?;
            let Some(tip) = hand.index_tip() else {
                continue;
            };
            let at = tip.to_pixel(width, height);
            self.history.push(at);
            summary.points_added += 1;
            render::draw_marker(surface, at, &self.style)?;
        }

        render::draw_stroke(surface, self.history.as_slice(), &self.style)?;
        if let Some(overlay) = &self.overlay {
            render::draw_overlay(surface, overlay, &self.style)?;
        }
        render::end_mirrored(surface)?;
        Ok(summary)
    }

    /// Replace the recognized-shape overlay (`None` hides it).
    pub fn set_overlay(&mut self, points: Option<Vec<Point>>) {
        self.overlay = points.filter(|p| p.len() > 1);
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&[Point]> {
        self.overlay.as_deref()
    }

    /// Stroke points in append order.
    #[must_use]
    pub fn stroke_points(&self) -> Vec<Point> {
        self.history.to_vec()
    }
}

/// The browser engine. Owns the `<canvas>` surface and the capture loop over
/// the webcam and MediaPipe Hands.
pub struct Engine {
    surface: WebSurface,
    capture: CaptureLoop<WebCamera, MediaPipeHands>,
}

impl Engine {
    /// Create an engine drawing to `surface` from an already started camera.
    #[must_use]
    pub fn new(surface: WebSurface, camera: WebCamera, config: LoopConfig) -> Self {
        Self { surface, capture: CaptureLoop::new(camera, config) }
    }

    /// Configure and install the detector.
    ///
    /// # Errors
    ///
    /// Returns `Err` if configuration fails or the engine is shut down.
    pub fn attach_detector(&mut self, hands: MediaPipeHands) -> Result<(), DetectorError> {
        self.capture.attach_detector(hands)
    }

    /// Animation-frame tick: match the canvas to the video size, then submit.
    pub fn tick(&mut self) -> TickOutcome {
        if let Some((width, height)) = self.capture.source().and_then(FrameSource::dimensions) {
            self.surface.resize(width, height);
        }
        self.capture.tick()
    }

    /// Detector result callback with the raw JS results object.
    pub fn on_results(&mut self, results: &JsValue) -> Option<Result<FrameSummary, SurfaceError>> {
        let parsed = web::parse_results(results);
        self.capture.on_results(&mut self.surface, &parsed)
    }

    /// Detector submission settled.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<(), DetectorError>) -> bool {
        self.capture.settle(ticket, outcome)
    }

    /// Tear down the detector and camera. Idempotent.
    pub fn shutdown(&mut self) -> bool {
        self.capture.shutdown()
    }

    pub fn set_overlay(&mut self, points: Option<Vec<Point>>) {
        self.capture.core_mut().set_overlay(points);
    }

    #[must_use]
    pub fn stroke_points(&self) -> Vec<Point> {
        self.capture.core().stroke_points()
    }

    #[must_use]
    pub fn stats(&self) -> LoopStats {
        self.capture.stats()
    }
}
