use continuum::{PhysicsError, Vector};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

fn vector() -> impl Strategy<Value = Vector> {
    (0.0f64..1e4, -720.0f64..720.0).prop_map(|(magnitude, angle)| Vector::new(magnitude, angle).unwrap())
}

/// Difference between two angles folded into [0, 180].
fn angle_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

proptest! {
    #[test]
    fn projections_round_trip(magnitude in 0.001f64..1e4, angle in -720.0f64..720.0) {
        let v = Vector::new(magnitude, angle).unwrap();
        let (x, y) = v.to_projections();
        let rebuilt = Vector::from_projections(x, y);
        prop_assert!((rebuilt.magnitude() - magnitude).abs() < TOLERANCE * magnitude.max(1.0));
        prop_assert!(angle_distance(rebuilt.angle(), angle) < 1e-4);
    }

    #[test]
    fn rebuilt_angles_stay_in_half_turn(x in -1e4f64..1e4, y in -1e4f64..1e4) {
        let v = Vector::from_projections(x, y);
        prop_assert!(v.angle() >= -180.0 && v.angle() <= 180.0);
        prop_assert!(v.magnitude() >= 0.0);
    }

    #[test]
    fn addition_commutes(a in vector(), b in vector()) {
        let (x1, y1) = (a + b).to_projections();
        let (x2, y2) = (b + a).to_projections();
        prop_assert!((x1 - x2).abs() < TOLERANCE);
        prop_assert!((y1 - y2).abs() < TOLERANCE);
    }

    #[test]
    fn subtracting_itself_gives_zero(a in vector()) {
        prop_assert!((a - a).magnitude() < TOLERANCE);
    }

    #[test]
    fn scaling_by_one_is_identity(v in vector()) {
        let (x1, y1) = v.to_projections();
        let (x2, y2) = (v * 1.0).to_projections();
        prop_assert!((x1 - x2).abs() < TOLERANCE);
        prop_assert!((y1 - y2).abs() < TOLERANCE);
    }

    #[test]
    fn scaling_by_zero_is_zero(v in vector()) {
        prop_assert_eq!((v * 0.0).magnitude(), 0.0);
    }

    #[test]
    fn negative_magnitude_is_rejected(magnitude in -1e4f64..-1e-9, angle in -360.0f64..360.0) {
        let is_invalid = matches!(
            Vector::new(magnitude, angle),
            Err(PhysicsError::InvalidMagnitude { .. })
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn points_never_pass_the_tip(v in vector(), step in 0.5f64..100.0) {
        let origin = continuum::Vec2::new(3.0, -2.0);
        for point in v.list_points(step, origin).unwrap() {
            prop_assert!((point - origin).length() <= v.magnitude() + TOLERANCE);
        }
    }
}
