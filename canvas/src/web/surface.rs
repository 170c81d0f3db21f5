use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, ImageBitmap};

use super::describe;
use crate::geom::{Point, Transform};
use crate::surface::{LineStyle, Surface, SurfaceError};

fn canvas_err(e: &JsValue) -> SurfaceError {
    SurfaceError::Canvas(describe(e))
}

/// Frame image echoed back by the detector.
pub enum FrameImage {
    Video(HtmlVideoElement),
    Canvas(HtmlCanvasElement),
    Bitmap(ImageBitmap),
}

impl FrameImage {
    /// Classify a JS image source. Unknown kinds yield `None`.
    #[must_use]
    pub fn from_js(value: JsValue) -> Option<Self> {
        let value = match value.dyn_into::<HtmlVideoElement>() {
            Ok(video) => return Some(Self::Video(video)),
            Err(value) => value,
        };
        let value = match value.dyn_into::<HtmlCanvasElement>() {
            Ok(canvas) => return Some(Self::Canvas(canvas)),
            Err(value) => value,
        };
        match value.dyn_into::<ImageBitmap>() {
            Ok(bitmap) => Some(Self::Bitmap(bitmap)),
            Err(_) => None,
        }
    }
}

/// `<canvas>` 2D context surface.
pub struct WebSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl WebSurface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| canvas_err(&e))?
            .ok_or(SurfaceError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for WebSurface {
    type Image = FrameImage;

    fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn set_transform(&mut self, t: Transform) -> Result<(), SurfaceError> {
        self.ctx.set_transform(t.sx, 0.0, 0.0, t.sy, t.tx, t.ty).map_err(|e| canvas_err(&e))
    }

    fn draw_image(&mut self, image: &FrameImage, width: f64, height: f64) -> Result<(), SurfaceError> {
        let drawn = match image {
            FrameImage::Video(video) => {
                self.ctx.draw_image_with_html_video_element_and_dw_and_dh(video, 0.0, 0.0, width, height)
            }
            FrameImage::Canvas(canvas) => {
                self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(canvas, 0.0, 0.0, width, height)
            }
            FrameImage::Bitmap(bitmap) => {
                self.ctx.draw_image_with_image_bitmap_and_dw_and_dh(bitmap, 0.0, 0.0, width, height)
            }
        };
        drawn.map_err(|e| canvas_err(&e))
    }

    fn stroke_segments(&mut self, segments: &[(Point, Point)], style: LineStyle<'_>) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        for (a, b) in segments {
            self.ctx.move_to(a.x, a.y);
            self.ctx.line_to(b.x, b.y);
        }
        self.ctx.set_stroke_style_str(style.color);
        self.ctx.set_line_width(style.width);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .map_err(|e| canvas_err(&e))?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], style: LineStyle<'_>) -> Result<(), SurfaceError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.set_stroke_style_str(style.color);
        self.ctx.set_line_width(style.width);
        self.ctx.stroke();
        Ok(())
    }
}
