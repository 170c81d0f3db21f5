//! Shared constants for the canvas crate.

// ── Landmarks ───────────────────────────────────────────────────

/// Landmarks reported per detected hand.
pub const LANDMARKS_PER_HAND: usize = 21;

// ── Overlay styling ─────────────────────────────────────────────

/// Skeleton connector color.
pub const SKELETON_COLOR: &str = "#00FF00";

/// Skeleton connector width in canvas pixels.
pub const SKELETON_LINE_WIDTH: f64 = 5.0;

/// Fingertip marker radius in canvas pixels.
pub const MARKER_RADIUS_PX: f64 = 10.0;

/// Fingertip marker fill color.
pub const MARKER_COLOR: &str = "red";

/// Accumulated stroke color.
pub const STROKE_COLOR: &str = "blue";

/// Accumulated stroke width in canvas pixels.
pub const STROKE_LINE_WIDTH: f64 = 5.0;

/// Recognized-shape overlay color.
pub const OVERLAY_COLOR: &str = "orange";

/// Recognized-shape overlay width in canvas pixels.
pub const OVERLAY_LINE_WIDTH: f64 = 3.0;

// ── History ─────────────────────────────────────────────────────

/// Default cap on retained stroke points. Oldest points are dropped first.
pub const DEFAULT_STROKE_LIMIT: usize = 10_000;
