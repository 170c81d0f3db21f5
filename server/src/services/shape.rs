//! Geometric shape recognition for freehand strokes.
//!
//! Classifies a stroke as a circle, triangle, square, rectangle or line by
//! simple geometry on the sampled points, then produces an idealized outline
//! of the recognized shape.
//!
//! ORDER
//! =====
//! Checks run circle first, then triangle, then the bounding-box
//! square/rectangle split. A perfectly flat stroke (zero height) falls
//! through to the straight-line test.

use serde::{Deserialize, Serialize};

const MIN_POINTS: usize = 6;
const CIRCLE_VARIANCE_RATIO: f64 = 0.35;
const CIRCLE_CLOSURE_RATIO: f64 = 0.6;
const CIRCLE_ASPECT: (f64, f64) = (0.7, 1.3);
const CORNER_MAX_DEGREES: f64 = 95.0;
const TRIANGLE_CORNERS: (usize, usize) = (2, 4);
const SQUARE_ASPECT: (f64, f64) = (0.85, 1.15);
const LINE_MAX_DEVIATION: f64 = 8.0;
const CIRCLE_STEP_DEGREES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Triangle,
    Square,
    Rectangle,
    Line,
    Unknown,
}

/// Result of [`recognize`], serialized as the API response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recognition {
    pub recognized_as: Shape,
    pub confidence: f64,
    pub smoothed_points: Vec<Point>,
}

/// Classify a stroke and idealize it.
#[must_use]
pub fn recognize(points: &[Point]) -> Recognition {
    let (shape, confidence) = detect_shape(points);
    Recognition { recognized_as: shape, confidence, smoothed_points: smooth_points(shape, points) }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    fn of(points: &[Point]) -> Self {
        points.iter().fold(
            Self { min_x: f64::INFINITY, min_y: f64::INFINITY, max_x: f64::NEG_INFINITY, max_y: f64::NEG_INFINITY },
            |b, p| Self { min_x: b.min_x.min(p.x), min_y: b.min_y.min(p.y), max_x: b.max_x.max(p.x), max_y: b.max_y.max(p.y) },
        )
    }

    fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    fn height(self) -> f64 {
        self.max_y - self.min_y
    }
}

#[allow(clippy::cast_precision_loss)]
fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

fn within(value: f64, (lo, hi): (f64, f64)) -> bool {
    (lo..=hi).contains(&value)
}

/// Classify a stroke. Fewer than six points is always `Unknown` at 0.
#[must_use]
pub fn detect_shape(points: &[Point]) -> (Shape, f64) {
    if points.len() < MIN_POINTS {
        return (Shape::Unknown, 0.0);
    }
    let bounds = Bounds::of(points);
    let (width, height) = (bounds.width(), bounds.height());

    if let Some(confidence) = circle_confidence(points, width, height) {
        return (Shape::Circle, confidence);
    }

    let corners = count_corners(points);
    if (TRIANGLE_CORNERS.0..=TRIANGLE_CORNERS.1).contains(&corners) {
        return (Shape::Triangle, 0.9);
    }

    if height != 0.0 {
        return if within(width / height, SQUARE_ASPECT) { (Shape::Square, 0.92) } else { (Shape::Rectangle, 0.88) };
    }

    if max_chord_deviation(points) < LINE_MAX_DEVIATION { (Shape::Line, 0.95) } else { (Shape::Unknown, 0.4) }
}

#[allow(clippy::cast_precision_loss)]
fn circle_confidence(points: &[Point], width: f64, height: f64) -> Option<f64> {
    if height == 0.0 || !within(width / height, CIRCLE_ASPECT) {
        return None;
    }
    let center = centroid(points);
    let n = points.len() as f64;
    let radii: Vec<f64> = points.iter().map(|p| p.distance(center)).collect();
    let mean_radius = radii.iter().sum::<f64>() / n;
    if mean_radius <= 0.0 {
        return None;
    }
    let variance = radii.iter().map(|r| (r - mean_radius).powi(2)).sum::<f64>() / n;

    let (first, last) = (points[0], points[points.len() - 1]);
    let closed = first.distance(last) < mean_radius * CIRCLE_CLOSURE_RATIO;
    if variance < mean_radius * CIRCLE_VARIANCE_RATIO && closed {
        Some((0.7 + (1.0 - variance / mean_radius)).min(0.98))
    } else {
        None
    }
}

/// Count sharp turns: the angle at `p[i]` between `p[i-2]` and `p[i+2]`.
fn count_corners(points: &[Point]) -> usize {
    if points.len() < 5 {
        return 0;
    }
    (2..points.len() - 2)
        .filter(|&i| {
            let (before, at, after) = (points[i - 2], points[i], points[i + 2]);
            let a = before.distance(at);
            let b = at.distance(after);
            let c = before.distance(after);
            if a * b == 0.0 {
                return false;
            }
            let cos = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
            cos.acos().to_degrees() < CORNER_MAX_DEGREES
        })
        .count()
}

/// Largest perpendicular distance from the start-end chord.
fn max_chord_deviation(points: &[Point]) -> f64 {
    let (start, end) = (points[0], points[points.len() - 1]);
    let chord = start.distance(end).max(1.0);
    points
        .iter()
        .map(|p| ((end.y - start.y) * p.x - (end.x - start.x) * p.y + end.x * start.y - end.y * start.x).abs() / chord)
        .fold(0.0, f64::max)
}

/// Idealized outline for a recognized shape. Lines and unknown strokes are
/// returned unchanged.
#[must_use]
pub fn smooth_points(shape: Shape, points: &[Point]) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let b = Bounds::of(points);
    match shape {
        Shape::Circle => {
            let center = centroid(points);
            let r = b.width().min(b.height()) / 2.0;
            (0..360)
                .step_by(CIRCLE_STEP_DEGREES)
                .map(|deg| {
                    let rad = f64::from(deg).to_radians();
                    Point::new(center.x + r * rad.cos(), center.y + r * rad.sin())
                })
                .collect()
        }
        Shape::Square => {
            let side = b.width().min(b.height());
            vec![
                Point::new(b.min_x, b.min_y),
                Point::new(b.min_x + side, b.min_y),
                Point::new(b.min_x + side, b.min_y + side),
                Point::new(b.min_x, b.min_y + side),
                Point::new(b.min_x, b.min_y),
            ]
        }
        Shape::Rectangle => vec![
            Point::new(b.min_x, b.min_y),
            Point::new(b.max_x, b.min_y),
            Point::new(b.max_x, b.max_y),
            Point::new(b.min_x, b.max_y),
            Point::new(b.min_x, b.min_y),
        ],
        Shape::Triangle => {
            let apex = Point::new(centroid(points).x, b.min_y);
            vec![apex, Point::new(b.min_x, b.max_y), Point::new(b.max_x, b.max_y), apex]
        }
        Shape::Line | Shape::Unknown => points.to_vec(),
    }
}

#[cfg(test)]
#[path = "shape_test.rs"]
mod tests;
