//! Disease-specific analysis profiles
//!
//! A profile bundles the gait and TUG thresholds plus the optional clinical
//! measurements suited to one diagnosis group. Profiles are plain data: the
//! analyzers stay generic and read their tuning from whichever profile the
//! registry resolves for the patient's diagnosis.

pub mod catalog;
pub mod flags;
pub mod gait;
pub mod registry;
pub mod tug;

use serde::{Deserialize, Serialize};

pub use catalog::GENERAL_PROFILE;
pub use flags::ClinicalFlags;
pub use gait::GaitProfile;
pub use registry::{ProfileMatch, ProfileRegistry};
pub use tug::TugProfile;

/// Tuned parameter bundle for one diagnosis group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseProfile {
    /// Stable identifier (e.g. `"parkinsons"`)
    pub name: String,
    /// Human-readable name for reports
    pub display_name: String,
    /// Case-insensitive substrings matched against free-text diagnoses
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub gait: GaitProfile,
    #[serde(default)]
    pub tug: TugProfile,
    #[serde(default)]
    pub clinical_flags: ClinicalFlags,
    #[serde(default)]
    pub description: String,
}

impl DiseaseProfile {
    /// Create a profile with baseline thresholds and no keywords
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            keywords: Vec::new(),
            gait: GaitProfile::default(),
            tug: TugProfile::default(),
            clinical_flags: ClinicalFlags::default(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_gait(mut self, gait: GaitProfile) -> Self {
        self.gait = gait;
        self
    }

    #[must_use]
    pub fn with_tug(mut self, tug: TugProfile) -> Self {
        self.tug = tug;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, clinical_flags: ClinicalFlags) -> Self {
        self.clinical_flags = clinical_flags;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Keywords in their matching form, in declaration order
    fn lowercase_keywords(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.to_lowercase()).collect()
    }

    /// First keyword found in `diagnosis_lower`, as originally written
    ///
    /// `keywords_lower` is `lowercase_keywords()` of this profile and
    /// `diagnosis_lower` must already be lowercased.
    fn matching_keyword<'a>(&'a self, keywords_lower: &[String], diagnosis_lower: &str) -> Option<&'a str> {
        keywords_lower
            .iter()
            .position(|keyword| diagnosis_lower.contains(keyword.as_str()))
            .and_then(|i| self.keywords.get(i))
            .map(String::as_str)
    }

    /// Check whether this profile applies to a free-text diagnosis
    #[must_use]
    pub fn matches(&self, diagnosis: &str) -> bool {
        self.matching_keyword(&self.lowercase_keywords(), &diagnosis.to_lowercase())
            .is_some()
    }
}
