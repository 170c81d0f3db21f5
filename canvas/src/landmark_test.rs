#![allow(clippy::float_cmp)]

use super::*;

fn full_hand() -> Hand {
    Hand::new(
        (0..HandLandmark::COUNT)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let v = i as f64 / 100.0;
                Landmark::new(v, v)
            })
            .collect(),
    )
}

// =============================================================
// Landmark
// =============================================================

#[test]
fn to_pixel_scales_by_surface_size() {
    let lm = Landmark::new(0.1, 0.5);
    let p = lm.to_pixel(640.0, 480.0);
    assert!((p.x - 64.0).abs() < 1e-9);
    assert!((p.y - 240.0).abs() < 1e-9);
}

#[test]
fn landmark_deserializes_without_z() {
    let lm: Landmark = serde_json::from_str(r#"{"x":0.25,"y":0.75}"#).unwrap();
    assert_eq!(lm, Landmark::new(0.25, 0.75));
}

#[test]
fn landmark_deserializes_with_z() {
    let lm: Landmark = serde_json::from_str(r#"{"x":0.1,"y":0.2,"z":-0.05}"#).unwrap();
    assert_eq!(lm.z, -0.05);
}

// =============================================================
// HandLandmark
// =============================================================

#[test]
fn index_finger_tip_is_eight() {
    assert_eq!(HandLandmark::IndexFingerTip.index(), 8);
}

#[test]
fn from_index_round_trips_all_landmarks() {
    for i in 0..HandLandmark::COUNT {
        let lm = HandLandmark::from_index(i).unwrap();
        assert_eq!(lm.index(), i);
    }
}

#[test]
fn from_index_out_of_range_is_none() {
    assert!(HandLandmark::from_index(21).is_none());
    assert!(HandLandmark::from_index(usize::MAX).is_none());
}

// =============================================================
// Topology
// =============================================================

#[test]
fn connections_reference_valid_landmarks() {
    for (a, b) in HAND_CONNECTIONS {
        assert!(a.index() < HandLandmark::COUNT);
        assert!(b.index() < HandLandmark::COUNT);
        assert_ne!(a, b);
    }
}

#[test]
fn every_landmark_is_connected() {
    let mut seen = [false; HandLandmark::COUNT];
    for (a, b) in HAND_CONNECTIONS {
        seen[a.index()] = true;
        seen[b.index()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

// =============================================================
// Hand
// =============================================================

#[test]
fn hand_deserializes_from_detector_array() {
    let json = serde_json::to_string(&vec![serde_json::json!({"x": 0.5, "y": 0.5, "z": 0.0}); 21]).unwrap();
    let hand: Hand = serde_json::from_str(&json).unwrap();
    assert_eq!(hand.len(), 21);
    assert_eq!(hand.index_tip(), Some(&Landmark::new(0.5, 0.5)));
}

#[test]
fn short_hand_has_no_index_tip() {
    let hand = Hand::new(vec![Landmark::new(0.1, 0.1); 5]);
    assert!(hand.index_tip().is_none());
    assert!(!hand.is_empty());
}

#[test]
fn connector_segments_cover_full_topology() {
    let hand = full_hand();
    let segments = hand.connector_segments(100.0, 100.0);
    assert_eq!(segments.len(), HAND_CONNECTIONS.len());
    // Wrist -> thumb CMC: landmark 0 at (0,0), landmark 1 at (1,1).
    assert_eq!(segments[0].0, Point::new(0.0, 0.0));
    assert!((segments[0].1.x - 1.0).abs() < 1e-9);
}

#[test]
fn connector_segments_skip_missing_landmarks() {
    let hand = Hand::new(vec![Landmark::new(0.1, 0.1); 5]);
    let segments = hand.connector_segments(10.0, 10.0);
    // Only the four thumb connectors have both ends present.
    assert_eq!(segments.len(), 4);
}
