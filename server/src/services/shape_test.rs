use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn circle(cx: f64, cy: f64, r: f64, step_degrees: usize, end_degrees: usize) -> Vec<Point> {
    (0..=end_degrees)
        .step_by(step_degrees)
        .take_while(|&deg| deg < 360)
        .map(|deg| {
            let rad = (deg as f64).to_radians();
            Point::new(cx + r * rad.cos(), cy + r * rad.sin())
        })
        .collect()
}

/// Trace a box clockwise from the top-left, sampling every 10 px offset by
/// 5 px so no sample lands exactly on a corner.
fn traced_box(w: i32, h: i32) -> Vec<Point> {
    let mut pts = Vec::new();
    pts.extend((5..w).step_by(10).map(|x| Point::new(f64::from(x), 0.0)));
    pts.extend((5..h).step_by(10).map(|y| Point::new(f64::from(w), f64::from(y))));
    pts.extend((5..w).step_by(10).map(|x| Point::new(f64::from(w - x), f64::from(h))));
    pts.extend((5..h).step_by(10).map(|y| Point::new(0.0, f64::from(h - y))));
    pts
}

fn segment(a: (f64, f64), b: (f64, f64), n: u32) -> Vec<Point> {
    (0..n)
        .map(|t| {
            let t = f64::from(t) / f64::from(n);
            Point::new(a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
        })
        .collect()
}

fn traced_triangle() -> Vec<Point> {
    let mut pts = segment((100.0, 0.0), (200.0, 160.0), 8);
    pts.extend(segment((200.0, 160.0), (0.0, 160.0), 8));
    pts.extend(segment((0.0, 160.0), (100.0, 0.0), 8));
    pts.push(Point::new(100.0, 0.0));
    pts
}

// =============================================================================
// detect_shape
// =============================================================================

#[test]
fn too_few_points_is_unknown_with_zero_confidence() {
    let pts: Vec<Point> = (0..5).map(|i| Point::new(f64::from(i), 0.0)).collect();
    assert_eq!(detect_shape(&pts), (Shape::Unknown, 0.0));
    assert_eq!(detect_shape(&[]), (Shape::Unknown, 0.0));
}

#[test]
fn closed_round_stroke_is_a_circle() {
    let (shape, confidence) = detect_shape(&circle(100.0, 100.0, 80.0, 10, 350));
    assert_eq!(shape, Shape::Circle);
    assert!(approx(confidence, 0.98));
}

#[test]
fn slightly_wobbly_circle_is_still_a_circle() {
    let pts: Vec<Point> = circle(100.0, 100.0, 80.0, 10, 350)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let scale = if i % 2 == 0 { 83.0 / 80.0 } else { 77.0 / 80.0 };
            Point::new(100.0 + (p.x - 100.0) * scale, 100.0 + (p.y - 100.0) * scale)
        })
        .collect();
    assert_eq!(detect_shape(&pts).0, Shape::Circle);
}

#[test]
fn open_arc_is_not_a_circle() {
    let (shape, _) = detect_shape(&circle(100.0, 100.0, 80.0, 10, 180));
    assert_ne!(shape, Shape::Circle);
}

#[test]
fn traced_triangle_is_a_triangle() {
    assert_eq!(detect_shape(&traced_triangle()), (Shape::Triangle, 0.9));
}

#[test]
fn count_corners_finds_the_two_interior_vertices_of_a_triangle() {
    assert_eq!(count_corners(&traced_triangle()), 2);
}

#[test]
fn traced_square_is_a_square() {
    assert_eq!(detect_shape(&traced_box(100, 100)), (Shape::Square, 0.92));
}

#[test]
fn traced_wide_box_is_a_rectangle() {
    assert_eq!(detect_shape(&traced_box(200, 100)), (Shape::Rectangle, 0.88));
}

#[test]
fn flat_stroke_is_a_line() {
    let pts: Vec<Point> = (0..=10).map(|i| Point::new(f64::from(i * 10), 20.0)).collect();
    assert_eq!(detect_shape(&pts), (Shape::Line, 0.95));
}

#[test]
fn vertical_stroke_has_height_and_reads_as_rectangle() {
    let pts: Vec<Point> = (0..=10).map(|i| Point::new(50.0, f64::from(i * 10))).collect();
    assert_eq!(detect_shape(&pts).0, Shape::Rectangle);
}

#[test]
fn identical_points_do_not_divide_by_zero() {
    let pts = vec![Point::new(3.0, 3.0); 8];
    let (shape, confidence) = detect_shape(&pts);
    assert!(confidence.is_finite());
    assert_eq!(shape, Shape::Line);
}

// =============================================================================
// smooth_points
// =============================================================================

#[test]
fn circle_outline_has_sixty_points_at_half_the_short_side() {
    let pts = circle(100.0, 100.0, 80.0, 10, 350);
    let outline = smooth_points(Shape::Circle, &pts);
    assert_eq!(outline.len(), 60);
    let center = centroid(&pts);
    let b = Bounds::of(&pts);
    let r = b.width().min(b.height()) / 2.0;
    for p in &outline {
        assert!(approx(p.distance(center), r));
    }
    assert!(approx(outline[0].x, center.x + r));
    assert!(approx(outline[0].y, center.y));
}

#[test]
fn square_outline_is_closed_at_the_box_origin() {
    let pts = vec![Point::new(10.0, 20.0), Point::new(110.0, 20.0), Point::new(110.0, 100.0), Point::new(10.0, 100.0)];
    let outline = smooth_points(Shape::Square, &pts);
    assert_eq!(
        outline,
        vec![
            Point::new(10.0, 20.0),
            Point::new(90.0, 20.0),
            Point::new(90.0, 100.0),
            Point::new(10.0, 100.0),
            Point::new(10.0, 20.0),
        ]
    );
}

#[test]
fn rectangle_outline_is_the_closed_bounding_box() {
    let outline = smooth_points(Shape::Rectangle, &traced_box(200, 100));
    assert_eq!(outline.len(), 5);
    assert_eq!(outline.first(), outline.last());
    assert_eq!(outline[2], Point::new(200.0, 100.0));
}

#[test]
fn triangle_outline_puts_the_apex_over_the_centroid() {
    let pts = traced_triangle();
    let outline = smooth_points(Shape::Triangle, &pts);
    let cx = centroid(&pts).x;
    assert_eq!(outline.len(), 4);
    assert!(approx(outline[0].x, cx));
    assert!(approx(outline[0].y, 0.0));
    assert_eq!(outline[1], Point::new(0.0, 160.0));
    assert_eq!(outline[2], Point::new(200.0, 160.0));
    assert_eq!(outline[3], outline[0]);
}

#[test]
fn line_and_unknown_return_the_input() {
    let pts = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
    assert_eq!(smooth_points(Shape::Line, &pts), pts);
    assert_eq!(smooth_points(Shape::Unknown, &pts), pts);
    assert!(smooth_points(Shape::Circle, &[]).is_empty());
}

// =============================================================================
// recognize / wire format
// =============================================================================

#[test]
fn recognize_short_stroke_echoes_points() {
    let pts = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    let r = recognize(&pts);
    assert_eq!(r.recognized_as, Shape::Unknown);
    assert_eq!(r.smoothed_points, pts);
}

#[test]
fn recognition_serializes_lowercase_label() {
    let r = recognize(&traced_box(100, 100));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["recognized_as"], "square");
    assert_eq!(json["confidence"], 0.92);
    assert_eq!(json["smoothed_points"].as_array().unwrap().len(), 5);
    assert_eq!(json["smoothed_points"][0]["x"], 0.0);
}
