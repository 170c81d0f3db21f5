//! Rendering: paints one composited overlay frame onto a [`Surface`].
//!
//! Painters receive read-only views of hands, stroke points and style, and
//! produce drawing calls. They do not mutate application state; the stroke
//! history is updated by [`crate::engine::SketchCore`] before painting.
//!
//! All fallible surface calls propagate errors via `Result<(), SurfaceError>`.

use crate::consts::{
    MARKER_COLOR, MARKER_RADIUS_PX, OVERLAY_COLOR, OVERLAY_LINE_WIDTH, SKELETON_COLOR, SKELETON_LINE_WIDTH,
    STROKE_COLOR, STROKE_LINE_WIDTH,
};
use crate::geom::{Point, Transform};
use crate::landmark::Hand;
use crate::surface::{LineStyle, Surface, SurfaceError};

/// Colors and sizes for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub skeleton_color: String,
    pub skeleton_width: f64,
    pub marker_color: String,
    pub marker_radius: f64,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub overlay_color: String,
    pub overlay_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            skeleton_color: SKELETON_COLOR.to_owned(),
            skeleton_width: SKELETON_LINE_WIDTH,
            marker_color: MARKER_COLOR.to_owned(),
            marker_radius: MARKER_RADIUS_PX,
            stroke_color: STROKE_COLOR.to_owned(),
            stroke_width: STROKE_LINE_WIDTH,
            overlay_color: OVERLAY_COLOR.to_owned(),
            overlay_width: OVERLAY_LINE_WIDTH,
        }
    }
}

/// Clear the surface and enter mirrored drawing space.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn begin_mirrored<S: Surface>(surface: &mut S) -> Result<(), SurfaceError> {
    let (width, _) = surface.size();
    surface.set_transform(Transform::IDENTITY)?;
    surface.clear()?;
    surface.set_transform(Transform::mirror_x(width))
}

/// Leave mirrored drawing space.
///
/// # Errors
///
/// Returns `Err` if the surface rejects the reset.
pub fn end_mirrored<S: Surface>(surface: &mut S) -> Result<(), SurfaceError> {
    surface.set_transform(Transform::IDENTITY)
}

/// Draw the camera frame stretched over the whole surface.
///
/// # Errors
///
/// Returns `Err` if the image cannot be drawn.
pub fn draw_frame_image<S: Surface>(surface: &mut S, image: &S::Image) -> Result<(), SurfaceError> {
    let (width, height) = surface.size();
    surface.draw_image(image, width, height)
}

/// Draw skeleton connector lines for one hand.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_skeleton<S: Surface>(surface: &mut S, hand: &Hand, style: &RenderStyle) -> Result<(), SurfaceError> {
    let (width, height) = surface.size();
    let segments = hand.connector_segments(width, height);
    if segments.is_empty() {
        return Ok(());
    }
    surface.stroke_segments(&segments, LineStyle { color: &style.skeleton_color, width: style.skeleton_width })
}

/// Draw the fingertip marker.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_marker<S: Surface>(surface: &mut S, at: Point, style: &RenderStyle) -> Result<(), SurfaceError> {
    surface.fill_circle(at, style.marker_radius, &style.marker_color)
}

/// Draw the accumulated stroke as one connected line. Needs two points.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_stroke<S: Surface>(surface: &mut S, points: &[Point], style: &RenderStyle) -> Result<(), SurfaceError> {
    if points.len() < 2 {
        return Ok(());
    }
    surface.stroke_polyline(points, LineStyle { color: &style.stroke_color, width: style.stroke_width })
}

/// Draw a recognized-shape outline on top of the stroke.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_overlay<S: Surface>(surface: &mut S, points: &[Point], style: &RenderStyle) -> Result<(), SurfaceError> {
    if points.len() < 2 {
        return Ok(());
    }
    surface.stroke_polyline(points, LineStyle { color: &style.overlay_color, width: style.overlay_width })
}
