//! Per-frame analysis record
//!
//! A `Frame` is what every downstream analyzer consumes. Its serialized shape
//! (`frame_number`, `timestamp_ms`, `has_pose`, `landmarks`) is the integration
//! seam with the gait, TUG and balance analyzers and must stay stable.

use crate::error::MobilityError;
use crate::models::landmark::NamedLandmarkSet;
use serde::{Deserialize, Serialize};

/// One processed video frame
///
/// Deserializing rejects records where `has_pose` disagrees with the presence
/// of `landmarks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FrameRecord")]
pub struct Frame {
    /// Zero-based position of the frame in the recording
    pub frame_number: u64,
    /// Capture time in milliseconds from the start of the recording
    pub timestamp_ms: f64,
    /// Whether the pose estimator found a person in this frame
    pub has_pose: bool,
    /// Named landmarks, `None` exactly when `has_pose` is false
    pub landmarks: Option<NamedLandmarkSet>,
}

impl Frame {
    /// Create a frame without a detected pose
    #[must_use]
    pub const fn empty(frame_number: u64, timestamp_ms: f64) -> Self {
        Self {
            frame_number,
            timestamp_ms,
            has_pose: false,
            landmarks: None,
        }
    }

    /// Create a frame carrying a detected pose
    #[must_use]
    pub fn with_pose(frame_number: u64, timestamp_ms: f64, landmarks: NamedLandmarkSet) -> Self {
        Self {
            frame_number,
            timestamp_ms,
            has_pose: true,
            landmarks: Some(landmarks),
        }
    }

    /// Landmarks of this frame, if a pose was detected
    #[must_use]
    pub fn landmarks(&self) -> Option<&NamedLandmarkSet> {
        self.landmarks.as_ref()
    }
}

/// Wire shape of a `Frame` before the pose flag is checked
#[derive(Deserialize)]
struct FrameRecord {
    frame_number: u64,
    timestamp_ms: f64,
    has_pose: bool,
    landmarks: Option<NamedLandmarkSet>,
}

impl TryFrom<FrameRecord> for Frame {
    type Error = MobilityError;

    fn try_from(record: FrameRecord) -> Result<Self, Self::Error> {
        match (record.has_pose, record.landmarks) {
            (true, Some(landmarks)) => Ok(Self::with_pose(
                record.frame_number,
                record.timestamp_ms,
                landmarks,
            )),
            (false, None) => Ok(Self::empty(record.frame_number, record.timestamp_ms)),
            (has_pose, _) => Err(MobilityError::InvalidFrame {
                frame_number: record.frame_number,
                has_pose,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::landmark::{Landmark, LandmarkName};

    #[test]
    fn test_empty_frame_serializes_null_landmarks() {
        let frame = Frame::empty(4, 133.3);
        let json = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["frame_number"], 4);
        assert_eq!(json["has_pose"], false);
        assert!(json["landmarks"].is_null());
    }

    #[test]
    fn test_pose_flag_without_landmarks_is_rejected() {
        let json = r#"{"frame_number":0,"timestamp_ms":0.0,"has_pose":true,"landmarks":null}"#;
        let err = serde_json::from_str::<Frame>(json).unwrap_err();
        assert!(err.to_string().contains("has_pose is true"));
    }

    #[test]
    fn test_landmarks_without_pose_flag_are_rejected() {
        let json = r#"{"frame_number":2,"timestamp_ms":66.7,"has_pose":false,"landmarks":{"nose":{"x":0.5,"y":0.2,"z":0.0,"visibility":0.9}}}"#;
        assert!(serde_json::from_str::<Frame>(json).is_err());
    }

    #[test]
    fn test_serialized_frames_read_back() {
        let landmarks = [(LandmarkName::Nose, Landmark::new(0.5, 0.2, 0.0, 0.9))]
            .into_iter()
            .collect();
        let frames = vec![Frame::empty(0, 0.0), Frame::with_pose(1, 33.3, landmarks)];

        let json = serde_json::to_string(&frames).unwrap();
        let parsed: Vec<Frame> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, frames);
    }
}
