use serde_json::json;

use super::*;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn profile_parses_full_server_body() {
    let value = json!({
        "id": "7b6f",
        "name": "Ada",
        "email": "ada@example.com",
        "username": "ada",
        "created_at": "2026-01-01T00:00:00Z",
    });
    let profile = UserProfile::from_response(&value).unwrap();
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.username.as_deref(), Some("ada"));
}

#[test]
fn profile_requires_email() {
    assert_eq!(UserProfile::from_response(&json!({})), None);
    assert_eq!(UserProfile::from_response(&json!({"name": "A"})), None);
    assert_eq!(UserProfile::from_response(&json!(null)), None);
    assert_eq!(UserProfile::from_response(&json!({"email": ""})), None);
    assert_eq!(UserProfile::from_response(&json!({"email": 42})), None);
}

#[test]
fn profile_accepts_email_only() {
    let profile = UserProfile::from_response(&json!({"email": "a@b.com"})).unwrap();
    assert_eq!(profile.name, None);
    assert_eq!(profile.display_name(), "User");
}

#[test]
fn display_name_falls_back_for_blank_name() {
    let profile = UserProfile::from_response(&json!({"email": "a@b.com", "name": "  "})).unwrap();
    assert_eq!(profile.display_name(), "User");
}

#[test]
fn null_name_is_treated_as_missing() {
    let profile = UserProfile::from_response(&json!({"email": "a@b.com", "name": null})).unwrap();
    assert_eq!(profile.display_name(), "User");
}

#[test]
fn non_string_optional_fields_do_not_reject_profile() {
    let value = json!({
        "email": "a@b.com",
        "name": 7,
        "id": 42,
        "username": ["ada"],
        "created_at": {"secs": 0},
    });
    let profile = UserProfile::from_response(&value).unwrap();
    assert_eq!(profile.email, "a@b.com");
    assert_eq!(profile.id, None);
    assert_eq!(profile.name, None);
    assert_eq!(profile.username, None);
    assert_eq!(profile.created_at, None);
    assert_eq!(profile.display_name(), "User");
}

#[test]
fn numeric_id_keeps_string_name() {
    let profile = UserProfile::from_response(&json!({"email": "a@b.com", "name": "A", "id": 42})).unwrap();
    assert_eq!(profile.display_name(), "A");
}

// =============================================================
// Drawing
// =============================================================

#[test]
fn perfect_drawing_parses_without_points() {
    let body: PerfectDrawing =
        serde_json::from_value(json!({"recognized_as": "unknown", "confidence": 0.0})).unwrap();
    assert_eq!(body.recognized_as, "unknown");
    assert!(body.smoothed_points.is_empty());
}

#[test]
fn perfect_drawing_request_serializes_points() {
    let req = PerfectDrawingRequest { points: vec![StrokePoint { x: 1.0, y: 2.5 }] };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({"points": [{"x": 1.0, "y": 2.5}]}));
}
