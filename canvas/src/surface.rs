//! 2D drawing surface abstraction.
//!
//! [`Surface`] is the narrow set of canvas operations the overlay uses. The
//! browser implementation lives in [`crate::web::WebSurface`];
//! [`RecordingSurface`] captures the same calls as [`DrawCmd`]s so rendering
//! can be asserted on natively.
//!
//! Coordinates passed to drawing calls are in drawing space. The active
//! [`Transform`] maps them into device pixels.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::marker::PhantomData;

use crate::geom::{Point, Transform};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("2d context unavailable")]
    NoContext,
    #[error("canvas call failed: {0}")]
    Canvas(String),
}

/// Stroke color and width for line drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle<'a> {
    pub color: &'a str,
    pub width: f64,
}

pub trait Surface {
    /// Frame image type this surface can composite.
    type Image;

    /// Surface size in pixels as `(width, height)`.
    fn size(&self) -> (f64, f64);

    /// Resize the backing store. No-op when already at that size.
    fn resize(&mut self, width: u32, height: u32);

    /// Clear every pixel, ignoring the active transform.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Replace the active transform.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn set_transform(&mut self, transform: Transform) -> Result<(), SurfaceError>;

    /// Draw `image` stretched to `width` x `height` at the drawing-space origin.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the image cannot be drawn (e.g. not yet decodable).
    fn draw_image(&mut self, image: &Self::Image, width: f64, height: f64) -> Result<(), SurfaceError>;

    /// Stroke independent line segments in one path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn stroke_segments(&mut self, segments: &[(Point, Point)], style: LineStyle<'_>) -> Result<(), SurfaceError>;

    /// Fill a circle.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), SurfaceError>;

    /// Stroke one connected path through `points` in order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying context rejects the call.
    fn stroke_polyline(&mut self, points: &[Point], style: LineStyle<'_>) -> Result<(), SurfaceError>;
}

// =============================================================
// Recording surface
// =============================================================

/// One recorded drawing call, with the transform active when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear,
    SetTransform(Transform),
    Image { width: f64, height: f64, transform: Transform },
    Segments { segments: Vec<(Point, Point)>, color: String, width: f64, transform: Transform },
    Circle { center: Point, radius: f64, color: String, transform: Transform },
    Polyline { points: Vec<Point>, color: String, width: f64, transform: Transform },
}

/// Headless surface that records calls instead of painting.
#[derive(Debug)]
pub struct RecordingSurface<I = ()> {
    width: u32,
    height: u32,
    transform: Transform,
    commands: Vec<DrawCmd>,
    fail_images: bool,
    _image: PhantomData<fn(&I)>,
}

impl<I> RecordingSurface<I> {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            transform: Transform::IDENTITY,
            commands: Vec::new(),
            fail_images: false,
            _image: PhantomData,
        }
    }

    /// Make `draw_image` fail, as a browser does for a video with no data yet.
    #[must_use]
    pub fn failing_images(mut self) -> Self {
        self.fail_images = true;
        self
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    /// Device-space centers of every filled circle, in draw order.
    #[must_use]
    pub fn circle_centers(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Circle { center, transform, .. } => Some(transform.apply(*center)),
                _ => None,
            })
            .collect()
    }

    /// Drawing-space point lists of every polyline, in draw order.
    #[must_use]
    pub fn polylines(&self) -> Vec<&[Point]> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl<I> Surface for RecordingSurface<I> {
    type Image = I;

    fn size(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(DrawCmd::Clear);
        Ok(())
    }

    fn set_transform(&mut self, transform: Transform) -> Result<(), SurfaceError> {
        self.transform = transform;
        self.commands.push(DrawCmd::SetTransform(transform));
        Ok(())
    }

    fn draw_image(&mut self, _image: &I, width: f64, height: f64) -> Result<(), SurfaceError> {
        if self.fail_images {
            return Err(SurfaceError::Canvas("image not ready".to_owned()));
        }
        self.commands.push(DrawCmd::Image { width, height, transform: self.transform });
        Ok(())
    }

    fn stroke_segments(&mut self, segments: &[(Point, Point)], style: LineStyle<'_>) -> Result<(), SurfaceError> {
        self.commands.push(DrawCmd::Segments {
            segments: segments.to_vec(),
            color: style.color.to_owned(),
            width: style.width,
            transform: self.transform,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), SurfaceError> {
        self.commands.push(DrawCmd::Circle { center, radius, color: color.to_owned(), transform: self.transform });
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], style: LineStyle<'_>) -> Result<(), SurfaceError> {
        self.commands.push(DrawCmd::Polyline {
            points: points.to_vec(),
            color: style.color.to_owned(),
            width: style.width,
            transform: self.transform,
        });
        Ok(())
    }
}
