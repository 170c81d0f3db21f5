//! Shape recognition endpoint.

use axum::response::Json;
use serde::Deserialize;

use crate::services::shape::{self, Point, Recognition};

#[derive(Debug, Deserialize)]
pub struct PerfectDrawingRequest {
    #[serde(default)]
    pub points: Vec<Point>,
}

/// `POST /api/ai/perfect-drawing` — classify a stroke and return its outline.
pub async fn perfect_drawing(Json(body): Json<PerfectDrawingRequest>) -> Json<Recognition> {
    let recognition = shape::recognize(&body.points);
    tracing::debug!(
        points = body.points.len(),
        shape = ?recognition.recognized_as,
        confidence = recognition.confidence,
        "stroke recognized"
    );
    Json(recognition)
}

#[cfg(test)]
#[path = "drawing_test.rs"]
mod tests;
