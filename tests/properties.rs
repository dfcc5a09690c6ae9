use mobility_core::{Landmark, LandmarkName, build_frame, normalize, risk_level, speed_score, time_score};
use proptest::prelude::*;

fn landmark() -> impl Strategy<Value = Landmark> {
    (any::<f64>(), any::<f64>(), any::<f64>(), any::<f64>())
        .prop_map(|(x, y, z, visibility)| Landmark::new(x, y, z, visibility))
}

proptest! {
    #[test]
    fn normalize_keys_match_skeleton_prefix(skeleton in prop::collection::vec(landmark(), 0..=33)) {
        let set = normalize(&skeleton);
        prop_assert_eq!(set.len(), skeleton.len());
        for name in set.names() {
            prop_assert!(name.index() < skeleton.len());
        }
    }

    #[test]
    fn full_skeleton_covers_every_name(skeleton in prop::collection::vec(landmark(), 33)) {
        let set = normalize(&skeleton);
        let names: Vec<LandmarkName> = set.names().collect();
        prop_assert_eq!(names, LandmarkName::ALL.to_vec());
    }

    #[test]
    fn absent_skeleton_never_has_pose(frame_number in any::<u64>(), timestamp_ms in any::<f64>()) {
        let frame = build_frame::<Landmark>(None, frame_number, timestamp_ms);
        prop_assert!(!frame.has_pose);
        prop_assert!(frame.landmarks.is_none());
        prop_assert_eq!(frame.frame_number, frame_number);
    }

    #[test]
    fn speed_score_non_decreasing(a in -5.0f64..5.0, b in -5.0f64..5.0) {
        let (slow, fast) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(speed_score(slow) <= speed_score(fast));
    }

    #[test]
    fn time_score_non_increasing(a in 0.0f64..60.0, b in 0.0f64..60.0) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(time_score(short) >= time_score(long));
    }

    #[test]
    fn components_come_from_four_bands(speed in -5.0f64..5.0, time in 0.0f64..60.0) {
        prop_assert!([10, 25, 40, 50].contains(&speed_score(speed)));
        prop_assert!([10, 25, 40, 50].contains(&time_score(time)));
    }

    #[test]
    fn risk_level_non_increasing_in_severity(a in 0u32..=100, b in 0u32..=100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        // Ord on RiskLevel runs from Normal to High
        prop_assert!(risk_level(high) <= risk_level(low));
    }
}
