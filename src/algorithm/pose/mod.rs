//! Pose landmark processing
//!
//! This module turns raw pose-estimator output into the named landmark
//! records and frames consumed by the mobility analyzers.

pub mod normalizer;

pub use normalizer::{build_frame, build_frames, normalize, pose_detection_rate};
