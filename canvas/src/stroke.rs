//! Fingertip stroke history.
//!
//! The drawn path is the cumulative trail of the index fingertip across the
//! whole session, redrawn in full every frame. Points are kept in append
//! order. A retention cap bounds memory and redraw cost; once reached, the
//! oldest points fall off the front.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use std::collections::VecDeque;

use crate::consts::DEFAULT_STROKE_LIMIT;
use crate::geom::Point;

/// Ordered fingertip positions in canvas pixel space.
#[derive(Debug, Clone)]
pub struct StrokeHistory {
    points: VecDeque<Point>,
    limit: Option<usize>,
    evicted: u64,
}

impl Default for StrokeHistory {
    fn default() -> Self {
        Self::with_limit(Some(DEFAULT_STROKE_LIMIT))
    }
}

impl StrokeHistory {
    /// History that never drops points.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::with_limit(None)
    }

    /// History retaining at most `limit` points (`None` for no cap).
    /// A cap of zero is raised to one.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { points: VecDeque::new(), limit: limit.map(|l| l.max(1)), evicted: 0 }
    }

    /// Append a point, evicting the oldest one if the cap is reached.
    pub fn push(&mut self, point: Point) {
        if let Some(limit) = self.limit {
            while self.points.len() >= limit {
                self.points.pop_front();
                self.evicted += 1;
            }
        }
        self.points.push_back(point);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Points dropped by the retention cap so far.
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Contiguous view of the points in append order, for polyline drawing.
    pub fn as_slice(&mut self) -> &[Point] {
        self.points.make_contiguous()
    }

    /// Copy of the points in append order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }

    /// Whether a connected line can be drawn (more than one point).
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }
}
