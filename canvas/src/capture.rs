//! Capture-infer-render loop driver.
//!
//! ARCHITECTURE
//! ============
//! The camera and the hand detector are capabilities behind [`FrameSource`]
//! and [`HandDetector`]. [`CaptureLoop`] owns both, plus the
//! [`SketchCore`] that paints results. The host calls:
//!
//! - [`CaptureLoop::tick`] once per animation frame (always rescheduling),
//! - [`CaptureLoop::on_results`] from the detector's result callback,
//! - [`CaptureLoop::settle`] when the detector's submission completes,
//! - [`CaptureLoop::shutdown`] on unmount.
//!
//! At most one submission is in flight ([`InflightGate`]); ticks while busy
//! are dropped and late results after shutdown are discarded, so results are
//! applied in submission order.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use serde::{Deserialize, Serialize};

use crate::engine::{FrameSummary, SketchCore};
use crate::gate::{InflightGate, Ticket};
use crate::landmark::Hand;
use crate::render::RenderStyle;
use crate::stroke::StrokeHistory;
use crate::surface::{Surface, SurfaceError};

// =============================================================
// Capabilities
// =============================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectorError {
    #[error("detector unavailable: {0}")]
    Unavailable(String),
    #[error("detector configuration failed: {0}")]
    Configure(String),
    #[error("detector rejected frame: {0}")]
    Rejected(String),
    #[error("capture loop already shut down")]
    Closed,
    #[error("a detection request is still in flight")]
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("camera unavailable: {0}")]
    Unavailable(String),
    #[error("camera permission denied or stream failed: {0}")]
    Stream(String),
}

/// Fixed detector configuration, serialized in the detector's camelCase form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandsOptions {
    pub max_num_hands: u8,
    pub model_complexity: u8,
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
}

impl Default for HandsOptions {
    fn default() -> Self {
        Self { max_num_hands: 1, model_complexity: 1, min_detection_confidence: 0.5, min_tracking_confidence: 0.5 }
    }
}

/// One detector callback payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResults<I> {
    /// Frame the landmarks were computed on, when the detector echoes it.
    pub image: Option<I>,
    /// Zero or more hands, each with up to 21 landmarks.
    pub multi_hand_landmarks: Vec<Hand>,
}

impl<I> DetectionResults<I> {
    #[must_use]
    pub fn new(image: Option<I>, multi_hand_landmarks: Vec<Hand>) -> Self {
        Self { image, multi_hand_landmarks }
    }
}

/// Live video frame source (the camera).
pub trait FrameSource {
    type Frame;

    /// Whether the source is producing frames (not paused, not ended).
    fn is_active(&self) -> bool;

    /// Handle to the current frame.
    fn frame(&self) -> Option<&Self::Frame>;

    /// Intrinsic frame size, once known.
    fn dimensions(&self) -> Option<(u32, u32)>;

    /// Release the device. Must tolerate repeated calls.
    fn stop(&mut self);
}

/// Hand landmark detector.
///
/// `send` starts an asynchronous submission tagged with `ticket`. The
/// implementation delivers results through its registered callback and
/// reports completion to the host, which forwards both to the loop.
pub trait HandDetector {
    type Frame;

    /// Apply detector options.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the detector rejects the options.
    fn configure(&mut self, options: &HandsOptions) -> Result<(), DetectorError>;

    /// Submit a frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the submission could not be started.
    fn send(&mut self, frame: &Self::Frame, ticket: Ticket) -> Result<(), DetectorError>;

    /// Release detector resources. Must tolerate repeated calls.
    fn close(&mut self);
}

// =============================================================
// Loop
// =============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    /// Stroke retention cap; `None` keeps every point.
    pub stroke_limit: Option<usize>,
    pub style: RenderStyle,
    pub options: HandsOptions,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            stroke_limit: StrokeHistory::default().limit(),
            style: RenderStyle::default(),
            options: HandsOptions::default(),
        }
    }
}

/// What a tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Submitted(Ticket),
    /// Source paused or ended.
    Inactive,
    /// A submission is still in flight; this tick was dropped.
    Busy,
    NoDetector,
    NoFrame,
    Failed(DetectorError),
    Closed,
}

/// Counters for the loop's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopStats {
    pub submitted: u64,
    pub dropped_busy: u64,
    pub skipped_inactive: u64,
    pub results_applied: u64,
    pub results_discarded: u64,
    pub detector_failures: u64,
    pub surface_errors: u64,
}

pub struct CaptureLoop<S, D> {
    source: Option<S>,
    detector: Option<D>,
    gate: InflightGate,
    core: SketchCore,
    options: HandsOptions,
    stats: LoopStats,
}

impl<S, D> CaptureLoop<S, D>
where
    S: FrameSource,
    D: HandDetector<Frame = S::Frame>,
{
    #[must_use]
    pub fn new(source: S, config: LoopConfig) -> Self {
        Self {
            source: Some(source),
            detector: None,
            gate: InflightGate::new(),
            core: SketchCore::new(StrokeHistory::with_limit(config.stroke_limit), config.style),
            options: config.options,
            stats: LoopStats::default(),
        }
    }

    /// Configure and install the detector. Replaces (and closes) any
    /// previous detector.
    ///
    /// Tickets are not tied to a detector, so a swap is only allowed while
    /// the slot is free. Otherwise a late result from the old detector could
    /// be applied under the new one.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the loop is shut down, a request is still in flight,
    /// or configuration fails. The offered detector is closed in every case
    /// and any installed detector is kept.
    pub fn attach_detector(&mut self, mut detector: D) -> Result<(), DetectorError> {
        if self.gate.is_closed() {
            detector.close();
            return Err(DetectorError::Closed);
        }
        if self.gate.is_busy() {
            detector.close();
            return Err(DetectorError::InFlight);
        }
        if let Err(e) = detector.configure(&self.options) {
            detector.close();
            return Err(e);
        }
        if let Some(mut previous) = self.detector.replace(detector) {
            previous.close();
        }
        Ok(())
    }

    /// Submit the current frame if the source is active and the slot is free.
    pub fn tick(&mut self) -> TickOutcome {
        if self.gate.is_closed() {
            return TickOutcome::Closed;
        }
        let Some(source) = self.source.as_ref() else {
            return TickOutcome::Closed;
        };
        if !source.is_active() {
            self.stats.skipped_inactive += 1;
            return TickOutcome::Inactive;
        }
        let Some(detector) = self.detector.as_mut() else {
            return TickOutcome::NoDetector;
        };
        let Some(frame) = source.frame() else {
            return TickOutcome::NoFrame;
        };
        let Some(ticket) = self.gate.try_acquire() else {
            self.stats.dropped_busy = self.gate.dropped();
            return TickOutcome::Busy;
        };
        match detector.send(frame, ticket) {
            Ok(()) => {
                self.stats.submitted += 1;
                TickOutcome::Submitted(ticket)
            }
            Err(e) => {
                self.gate.release(ticket);
                self.stats.detector_failures += 1;
                TickOutcome::Failed(e)
            }
        }
    }

    /// Apply one detector callback to `surface`.
    ///
    /// Returns `None` when the results are stale (no submission in flight,
    /// already delivered, or loop shut down). Surface failures are counted
    /// and returned; they never stop the loop.
    pub fn on_results<Sf>(
        &mut self,
        surface: &mut Sf,
        results: &DetectionResults<Sf::Image>,
    ) -> Option<Result<FrameSummary, SurfaceError>>
    where
        Sf: Surface,
    {
        if self.gate.deliver().is_none() {
            self.stats.results_discarded += 1;
            return None;
        }
        let outcome = self.core.on_results(surface, results);
        match &outcome {
            Ok(_) => self.stats.results_applied += 1,
            Err(_) => self.stats.surface_errors += 1,
        }
        Some(outcome)
    }

    /// Record completion of the submission tagged `ticket`, freeing the slot.
    /// Returns `false` for a stale ticket.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<(), DetectorError>) -> bool {
        if outcome.is_err() {
            self.stats.detector_failures += 1;
        }
        self.gate.release(ticket)
    }

    /// Stop submitting, close the detector and release the camera.
    ///
    /// Safe to call repeatedly and before a detector was attached. Returns
    /// `true` only for the call that actually tore down.
    pub fn shutdown(&mut self) -> bool {
        if self.gate.is_closed() {
            return false;
        }
        self.gate.close();
        if let Some(mut detector) = self.detector.take() {
            detector.close();
        }
        if let Some(mut source) = self.source.take() {
            source.stop();
        }
        true
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.gate.is_closed()
    }

    #[must_use]
    pub fn has_detector(&self) -> bool {
        self.detector.is_some()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    #[must_use]
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    #[must_use]
    pub fn core(&self) -> &SketchCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SketchCore {
        &mut self.core
    }

    #[must_use]
    pub fn stats(&self) -> LoopStats {
        LoopStats { dropped_busy: self.gate.dropped(), ..self.stats }
    }
}
