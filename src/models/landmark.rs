//! Pose landmark model
//!
//! This module contains the landmark types exchanged with the pose estimator:
//! the raw per-joint estimate, the fixed 33-point anatomical vocabulary, and the
//! named landmark set built from a raw skeleton.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of slots in the pose estimator's skeleton layout
pub const SKELETON_SIZE: usize = 33;

/// One skeletal joint estimate
///
/// Coordinates are normalized image-space values, typically within 0-1 but
/// never clamped. `visibility` is the estimator's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub visibility: f64,
}

impl Landmark {
    /// Create a new landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }
}

/// Anything the pose estimator hands over as a skeleton slot
///
/// Implemented for [`Landmark`] and for plain `[x, y, z, visibility]` arrays so
/// callers holding estimator output in either shape can normalize it directly.
pub trait PoseLandmark {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
    fn visibility(&self) -> f64;

    /// Copy into a [`Landmark`] record
    fn to_landmark(&self) -> Landmark {
        Landmark::new(self.x(), self.y(), self.z(), self.visibility())
    }
}

impl PoseLandmark for Landmark {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
    fn visibility(&self) -> f64 {
        self.visibility
    }
    fn to_landmark(&self) -> Landmark {
        *self
    }
}

impl PoseLandmark for [f64; 4] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
    fn z(&self) -> f64 {
        self[2]
    }
    fn visibility(&self) -> f64 {
        self[3]
    }
}

/// Anatomical landmark names, in skeleton index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkName {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkName {
    /// All landmark names, position `i` holding the name for skeleton index `i`
    pub const ALL: [Self; SKELETON_SIZE] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Skeleton index of this landmark
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Landmark name for a skeleton index, `None` past the end of the layout
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SKELETON_SIZE {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Wire name of this landmark (e.g. `"left_shoulder"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

impl fmt::Display for LandmarkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandmarkName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("Unknown landmark name: {s}"))
    }
}

/// Landmarks keyed by anatomical name
///
/// Only names whose index existed in the source skeleton are present, so a
/// set built from a truncated skeleton is partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedLandmarkSet {
    landmarks: FxHashMap<LandmarkName, Landmark>,
}

impl NamedLandmarkSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a landmark
    pub fn insert(&mut self, name: LandmarkName, landmark: Landmark) {
        self.landmarks.insert(name, landmark);
    }

    /// Get a landmark by name
    #[must_use]
    pub fn get(&self, name: LandmarkName) -> Option<&Landmark> {
        self.landmarks.get(&name)
    }

    /// Check if a landmark is present
    #[must_use]
    pub fn contains(&self, name: LandmarkName) -> bool {
        self.landmarks.contains_key(&name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Iterate over present landmarks in skeleton index order
    pub fn iter(&self) -> impl Iterator<Item = (LandmarkName, &Landmark)> + '_ {
        LandmarkName::ALL
            .into_iter()
            .filter_map(|name| self.landmarks.get(&name).map(|lm| (name, lm)))
    }

    /// Names of the present landmarks in skeleton index order
    pub fn names(&self) -> impl Iterator<Item = LandmarkName> + '_ {
        self.iter().map(|(name, _)| name)
    }

    /// Landmarks whose visibility is at least `min_visibility`
    ///
    /// `NaN` visibility never passes the filter.
    pub fn visible(&self, min_visibility: f64) -> impl Iterator<Item = (LandmarkName, &Landmark)> + '_ {
        self.iter()
            .filter(move |(_, lm)| lm.visibility >= min_visibility)
    }
}

impl FromIterator<(LandmarkName, Landmark)> for NamedLandmarkSet {
    fn from_iter<I: IntoIterator<Item = (LandmarkName, Landmark)>>(iter: I) -> Self {
        Self {
            landmarks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_table_endpoints() {
        assert_eq!(LandmarkName::from_index(0), Some(LandmarkName::Nose));
        assert_eq!(LandmarkName::from_index(32), Some(LandmarkName::RightFootIndex));
        assert_eq!(LandmarkName::from_index(33), None);
        assert_eq!(LandmarkName::LeftShoulder.index(), 11);
        assert_eq!(LandmarkName::RightHip.as_str(), "right_hip");
    }

    #[test]
    fn test_all_is_in_index_order() {
        for (i, name) in LandmarkName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn test_from_str_matches_as_str() {
        for name in LandmarkName::ALL {
            assert_eq!(name.as_str().parse::<LandmarkName>(), Ok(name));
        }
        assert!("left_toe".parse::<LandmarkName>().is_err());
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        for name in LandmarkName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
    }

    #[test]
    fn test_visible_filter() {
        let set: NamedLandmarkSet = [
            (LandmarkName::Nose, Landmark::new(0.5, 0.1, 0.0, 0.9)),
            (LandmarkName::LeftEar, Landmark::new(0.4, 0.1, 0.0, 0.2)),
            (LandmarkName::RightEar, Landmark::new(0.6, 0.1, 0.0, f64::NAN)),
        ]
        .into_iter()
        .collect();

        let visible: Vec<_> = set.visible(0.5).map(|(name, _)| name).collect();
        assert_eq!(visible, vec![LandmarkName::Nose]);
    }
}
