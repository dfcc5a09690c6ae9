//! Skeleton normalization
//!
//! Converts the pose estimator's indexed 33-slot skeleton into named landmarks
//! and wraps the result in the per-frame record consumed by the analyzers.
//! Values are copied verbatim: no clamping, no range checks, `NaN` included.

use crate::error::{MobilityError, Result};
use crate::models::frame::Frame;
use crate::models::landmark::{LandmarkName, NamedLandmarkSet, PoseLandmark};
use rayon::prelude::*;

/// Map an indexed skeleton to named landmarks
///
/// Every slot whose index is part of the fixed layout is copied under its
/// name. Indices missing from a short skeleton are simply absent from the
/// result, and slots past index 32 are ignored.
#[must_use]
pub fn normalize<L: PoseLandmark>(skeleton: &[L]) -> NamedLandmarkSet {
    LandmarkName::ALL
        .into_iter()
        .filter_map(|name| {
            skeleton
                .get(name.index())
                .map(|slot| (name, slot.to_landmark()))
        })
        .collect()
}

/// Build the analysis record for one frame
///
/// `None` means the estimator found no person in the frame.
#[must_use]
pub fn build_frame<L: PoseLandmark>(
    skeleton: Option<&[L]>,
    frame_number: u64,
    timestamp_ms: f64,
) -> Frame {
    match skeleton {
        Some(skeleton) => Frame::with_pose(frame_number, timestamp_ms, normalize(skeleton)),
        None => Frame::empty(frame_number, timestamp_ms),
    }
}

/// Build frames for a whole recording
///
/// Frames are numbered from 0 in input order and stamped at
/// `frame_number * 1000 / fps` milliseconds. Normalization runs in parallel;
/// the output order always matches the input order.
pub fn build_frames<S, L>(skeletons: &[Option<S>], fps: f64) -> Result<Vec<Frame>>
where
    S: AsRef<[L]> + Sync,
    L: PoseLandmark + Sync,
{
    if !fps.is_finite() || fps <= 0.0 {
        return Err(MobilityError::InvalidFrameRate(fps));
    }

    let frames: Vec<Frame> = skeletons
        .par_iter()
        .enumerate()
        .map(|(i, skeleton)| {
            let frame_number = i as u64;
            let timestamp_ms = frame_number as f64 * 1000.0 / fps;
            let skeleton = skeleton.as_ref().map(|s| AsRef::<[L]>::as_ref(s));
            build_frame(skeleton, frame_number, timestamp_ms)
        })
        .collect();

    log::debug!(
        "Built {} frames at {fps} fps ({} with pose)",
        frames.len(),
        frames.iter().filter(|f| f.has_pose).count()
    );

    Ok(frames)
}

/// Fraction of frames in which a pose was detected, `0.0` for no frames
#[must_use]
pub fn pose_detection_rate(frames: &[Frame]) -> f64 {
    if frames.is_empty() {
        return 0.0;
    }
    let detected = frames.iter().filter(|f| f.has_pose).count();
    detected as f64 / frames.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::landmark::{Landmark, SKELETON_SIZE};

    fn skeleton(len: usize) -> Vec<Landmark> {
        (0..len)
            .map(|i| Landmark::new(i as f64 / 100.0, 0.5, -0.1, 0.9))
            .collect()
    }

    #[test]
    fn test_normalize_full_skeleton() {
        let set = normalize(&skeleton(SKELETON_SIZE));
        assert_eq!(set.len(), SKELETON_SIZE);

        let nose = set.get(LandmarkName::Nose).unwrap();
        assert_eq!(nose.x, 0.0);
        let foot = set.get(LandmarkName::RightFootIndex).unwrap();
        assert_eq!(foot.x, 0.32);
    }

    #[test]
    fn test_normalize_extra_slots_ignored() {
        let set = normalize(&skeleton(40));
        assert_eq!(set.len(), SKELETON_SIZE);
    }

    #[test]
    fn test_normalize_passes_values_through() {
        let raw = vec![[1.7, -0.3, f64::NAN, 1.4]];
        let set = normalize(&raw);
        let nose = set.get(LandmarkName::Nose).unwrap();

        assert_eq!(nose.x, 1.7);
        assert_eq!(nose.y, -0.3);
        assert!(nose.z.is_nan());
        assert_eq!(nose.visibility, 1.4);
    }

    #[test]
    fn test_build_frames_numbering_and_timestamps() {
        let input = vec![Some(skeleton(33)), None, Some(skeleton(12))];
        let frames = build_frames::<_, Landmark>(&input, 30.0).unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].frame_number, 1);
        assert!((frames[1].timestamp_ms - 33.333_333).abs() < 1e-3);
        assert!(!frames[1].has_pose);
        assert_eq!(frames[2].landmarks().unwrap().len(), 12);
        assert!((pose_detection_rate(&frames) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_build_frames_rejects_bad_fps() {
        let input: Vec<Option<Vec<Landmark>>> = vec![None];
        assert!(build_frames::<_, Landmark>(&input, 0.0).is_err());
        assert!(build_frames::<_, Landmark>(&input, f64::NAN).is_err());
    }
}
