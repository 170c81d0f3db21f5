#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned affine transform: `x' = sx * x + tx`, `y' = sy * y + ty`.
///
/// This is the subset of the 2D context matrix the overlay needs. It maps
/// onto `setTransform(sx, 0, 0, sy, tx, ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self { sx: 1.0, sy: 1.0, tx: 0.0, ty: 0.0 };

    /// Horizontal flip about the vertical center of a surface `width` wide.
    ///
    /// Equivalent to `scale(-1, 1)` followed by `translate(-width, 0)`, which
    /// is how a front camera preview is shown as a mirror.
    #[must_use]
    pub fn mirror_x(width: f64) -> Self {
        Self { sx: -1.0, sy: 1.0, tx: width, ty: 0.0 }
    }

    /// Map a point from drawing space into device space.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point { x: self.sx.mul_add(p.x, self.tx), y: self.sy.mul_add(p.y, self.ty) }
    }

    /// Whether this transform flips the x axis.
    #[must_use]
    pub fn is_mirrored(&self) -> bool {
        self.sx < 0.0
    }
}
