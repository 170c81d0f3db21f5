//! Shared DTOs for the client/server REST boundary.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON bodies. Fields the server may omit are
//! `Option` with `#[serde(default)]` so older or partial responses still parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user profile as returned by `GET /api/auth/profile`.
///
/// `email` is what makes a profile valid; a response without one is treated
/// as an invalid session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Parse a profile response, requiring a non-empty string `email`.
    ///
    /// Other fields are read leniently: a missing or non-string value
    /// becomes `None` rather than rejecting the profile.
    #[must_use]
    pub fn from_response(value: &serde_json::Value) -> Option<Self> {
        let email = text_field(value, "email").filter(|e| !e.is_empty())?;
        Some(Self {
            email,
            name: text_field(value, "name"),
            id: text_field(value, "id"),
            username: text_field(value, "username"),
            created_at: text_field(value, "created_at"),
        })
    }

    /// Display name, falling back to `"User"` when missing or blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "User",
        }
    }
}

fn text_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(str::to_owned)
}

/// `POST /api/auth/login` request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/login` success body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// `POST /api/auth/register` request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// One stroke point in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
}

/// `POST /api/ai/perfect-drawing` request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerfectDrawingRequest {
    pub points: Vec<StrokePoint>,
}

/// `POST /api/ai/perfect-drawing` response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerfectDrawing {
    pub recognized_as: String,
    pub confidence: f64,
    #[serde(default)]
    pub smoothed_points: Vec<StrokePoint>,
}

/// Error body shape used by the server: `{"detail": "..."}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
