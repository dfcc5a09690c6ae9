//! Domain models for pose-based mobility assessment
//!
//! This module contains the landmark and frame records exchanged with the pose
//! estimator and with the downstream gait, TUG and balance analyzers.

pub mod frame;
pub mod landmark;

// Re-export commonly used types
pub use frame::Frame;
pub use landmark::{Landmark, LandmarkName, NamedLandmarkSet, PoseLandmark, SKELETON_SIZE};
