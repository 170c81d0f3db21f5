//! Draw-page state for the "Perfect it" shape recognition round trip.

#[cfg(test)]
#[path = "sketch_test.rs"]
mod sketch_test;

use crate::net::types::PerfectDrawing;

/// Fewest stroke points worth sending for recognition.
pub const MIN_RECOGNITION_POINTS: usize = 2;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SketchState {
    /// A recognition request is in flight.
    pub pending: bool,
    pub result: Option<PerfectDrawing>,
    pub error: Option<String>,
}

impl SketchState {
    /// Whether a stroke of `points` may be submitted now.
    #[must_use]
    pub fn can_submit(&self, points: usize) -> bool {
        !self.pending && points >= MIN_RECOGNITION_POINTS
    }

    pub fn begin(&mut self) {
        self.pending = true;
        self.error = None;
    }

    pub fn finish(&mut self, outcome: Result<PerfectDrawing, String>) {
        self.pending = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// One-line status for the toolbar, if there is anything to say.
    #[must_use]
    pub fn status_line(&self) -> Option<String> {
        if self.pending {
            return Some("Recognizing...".to_owned());
        }
        if let Some(e) = &self.error {
            return Some(format!("Recognition failed: {e}"));
        }
        self.result.as_ref().map(|r| format!("Recognized: {} ({})", r.recognized_as, confidence_percent(r.confidence)))
    }
}

/// Format a `[0, 1]` confidence as a whole percentage.
#[must_use]
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.0}%", (confidence.clamp(0.0, 1.0) * 100.0).round())
}
