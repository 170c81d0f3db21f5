//! Hand landmarks as reported by the detector, and the skeleton topology.
//!
//! Coordinates are normalized to the source frame: `x` and `y` lie in
//! `[0, 1]` relative to frame width and height. `z` is relative depth and is
//! carried through unused.

#[cfg(test)]
#[path = "landmark_test.rs"]
mod landmark_test;

use serde::{Deserialize, Serialize};

use crate::consts::LANDMARKS_PER_HAND;
use crate::geom::Point;

/// One normalized landmark.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Scale normalized coordinates to a `width` x `height` pixel surface.
    #[must_use]
    pub fn to_pixel(&self, width: f64, height: f64) -> Point {
        Point::new(self.x * width, self.y * height)
    }
}

/// Named indices of the 21 hand landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexFingerMcp = 5,
    IndexFingerPip = 6,
    IndexFingerDip = 7,
    IndexFingerTip = 8,
    MiddleFingerMcp = 9,
    MiddleFingerPip = 10,
    MiddleFingerDip = 11,
    MiddleFingerTip = 12,
    RingFingerMcp = 13,
    RingFingerPip = 14,
    RingFingerDip = 15,
    RingFingerTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    pub const COUNT: usize = LANDMARKS_PER_HAND;

    const ALL: [Self; LANDMARKS_PER_HAND] = [
        Self::Wrist,
        Self::ThumbCmc,
        Self::ThumbMcp,
        Self::ThumbIp,
        Self::ThumbTip,
        Self::IndexFingerMcp,
        Self::IndexFingerPip,
        Self::IndexFingerDip,
        Self::IndexFingerTip,
        Self::MiddleFingerMcp,
        Self::MiddleFingerPip,
        Self::MiddleFingerDip,
        Self::MiddleFingerTip,
        Self::RingFingerMcp,
        Self::RingFingerPip,
        Self::RingFingerDip,
        Self::RingFingerTip,
        Self::PinkyMcp,
        Self::PinkyPip,
        Self::PinkyDip,
        Self::PinkyTip,
    ];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Landmark pairs joined by skeleton connector lines.
pub const HAND_CONNECTIONS: [(HandLandmark, HandLandmark); 21] = {
    use HandLandmark as H;
    [
        // Thumb
        (H::Wrist, H::ThumbCmc),
        (H::ThumbCmc, H::ThumbMcp),
        (H::ThumbMcp, H::ThumbIp),
        (H::ThumbIp, H::ThumbTip),
        // Index
        (H::Wrist, H::IndexFingerMcp),
        (H::IndexFingerMcp, H::IndexFingerPip),
        (H::IndexFingerPip, H::IndexFingerDip),
        (H::IndexFingerDip, H::IndexFingerTip),
        // Middle
        (H::IndexFingerMcp, H::MiddleFingerMcp),
        (H::MiddleFingerMcp, H::MiddleFingerPip),
        (H::MiddleFingerPip, H::MiddleFingerDip),
        (H::MiddleFingerDip, H::MiddleFingerTip),
        // Ring
        (H::MiddleFingerMcp, H::RingFingerMcp),
        (H::RingFingerMcp, H::RingFingerPip),
        (H::RingFingerPip, H::RingFingerDip),
        (H::RingFingerDip, H::RingFingerTip),
        // Pinky and palm base
        (H::RingFingerMcp, H::PinkyMcp),
        (H::Wrist, H::PinkyMcp),
        (H::PinkyMcp, H::PinkyPip),
        (H::PinkyPip, H::PinkyDip),
        (H::PinkyDip, H::PinkyTip),
    ]
};

/// Landmark set for one detected hand, in detector order.
///
/// Deserializes directly from the detector's `[{x, y, z}, ...]` array. A
/// short array is tolerated; lookups of missing landmarks return `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    landmarks: Vec<Landmark>,
}

impl Hand {
    #[must_use]
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    #[must_use]
    pub fn get(&self, which: HandLandmark) -> Option<&Landmark> {
        self.landmarks.get(which.index())
    }

    /// The index fingertip, which drives the drawn stroke.
    #[must_use]
    pub fn index_tip(&self) -> Option<&Landmark> {
        self.get(HandLandmark::IndexFingerTip)
    }

    #[must_use]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Pixel-space connector segments for every topology pair present.
    #[must_use]
    pub fn connector_segments(&self, width: f64, height: f64) -> Vec<(Point, Point)> {
        HAND_CONNECTIONS
            .iter()
            .filter_map(|&(a, b)| {
                let start = self.get(a)?;
                let end = self.get(b)?;
                Some((start.to_pixel(width, height), end.to_pixel(width, height)))
            })
            .collect()
    }
}
