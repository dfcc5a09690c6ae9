//! Error handling for mobility-core.
//!
//! The scoring and lookup operations are total and never produce these errors.
//! They only surface for input coming from outside the crate: profile
//! catalogs, clinical configuration documents, sex codes and serialized frames.

use thiserror::Error;

/// Specialized error type for mobility-core
#[derive(Debug, Error)]
pub enum MobilityError {
    /// A profile failed validation
    #[error("Invalid profile '{name}': {reason}")]
    InvalidProfile {
        /// Name of the offending profile
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// Two profiles in one catalog share a name
    #[error("Duplicate profile name: {0}")]
    DuplicateProfile(String),

    /// The configured default profile is not part of the catalog
    #[error("Default profile '{0}' is not registered")]
    MissingDefaultProfile(String),

    /// A profile was requested by a name the registry does not know
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// A sex code other than "M" or "F"
    #[error("Invalid sex code '{0}', expected \"M\" or \"F\"")]
    InvalidSex(String),

    /// A recording frame rate that is not a positive finite number
    #[error("Invalid frame rate: {0}")]
    InvalidFrameRate(f64),

    /// A frame record whose `has_pose` flag disagrees with its landmarks
    #[error("Frame {frame_number}: has_pose is {has_pose} but landmarks disagree")]
    InvalidFrame {
        /// Position of the offending frame
        frame_number: u64,
        /// The flag as recorded
        has_pose: bool,
    },

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MobilityError {
    /// Create an invalid profile error
    pub fn invalid_profile(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for mobility-core operations
pub type Result<T> = std::result::Result<T, MobilityError>;
