//! A Rust library for clinical mobility assessment: pose landmark
//! normalization, disease-specific analysis profiles, fall-risk scoring and
//! gait-speed normative comparison.
//!
//! Every operation is a pure transform over data fixed at process start, so
//! all types can be shared freely across threads.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::ClinicalConfig;
pub use error::{MobilityError, Result};
pub use models::{Frame, Landmark, LandmarkName, NamedLandmarkSet, PoseLandmark};
pub use report::{AssessmentReport, AssessmentRequest};

// Pose normalization
pub use algorithm::pose::{build_frame, build_frames, normalize, pose_detection_rate};

// Disease profiles
pub use algorithm::profiles::{
    ClinicalFlags, DiseaseProfile, GaitProfile, ProfileMatch, ProfileRegistry, TugProfile,
};

// Fall risk scoring
pub use algorithm::fall_risk::{
    FallRiskAssessment, RiskLevel, assess, risk_level, speed_score, time_score, total_score,
};

// Normative comparison
pub use algorithm::normative::{
    NormInterpretation, NormativeBand, NormativeComparison, NormativeFallback, Sex, lookup,
    lookup_band, lookup_with_policy,
};
