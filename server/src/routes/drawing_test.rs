use super::*;

fn request(json: serde_json::Value) -> PerfectDrawingRequest {
    serde_json::from_value(json).unwrap()
}

#[test]
fn request_points_default_to_empty() {
    assert!(request(serde_json::json!({})).points.is_empty());
}

#[test]
fn request_parses_xy_points() {
    let req = request(serde_json::json!({ "points": [{ "x": 1.5, "y": 2 }, { "x": 3, "y": 4 }] }));
    assert_eq!(req.points, vec![Point::new(1.5, 2.0), Point::new(3.0, 4.0)]);
}

#[tokio::test]
async fn short_stroke_is_unknown_and_echoed() {
    let req = request(serde_json::json!({ "points": [{ "x": 1, "y": 1 }, { "x": 2, "y": 2 }] }));
    let Json(result) = perfect_drawing(Json(req)).await;
    assert_eq!(result.recognized_as, shape::Shape::Unknown);
    assert!(result.confidence.abs() < f64::EPSILON);
    assert_eq!(result.smoothed_points.len(), 2);
}

#[tokio::test]
async fn flat_stroke_is_recognized_as_line() {
    let points: Vec<serde_json::Value> = (0..10).map(|i| serde_json::json!({ "x": i * 10, "y": 50 })).collect();
    let Json(result) = perfect_drawing(Json(request(serde_json::json!({ "points": points })))).await;
    assert_eq!(result.recognized_as, shape::Shape::Line);
}
