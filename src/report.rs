//! Assessment report assembly
//!
//! Combines the independent core components for one completed test: the
//! fall-risk score, the profile resolved from the diagnosis and, when the
//! patient's age and sex are covered, the normative comparison.

use crate::algorithm::fall_risk::{self, FallRiskAssessment};
use crate::algorithm::normative::{self, NormInterpretation, NormativeComparison};
use crate::algorithm::profiles::ProfileRegistry;
use crate::config::ClinicalConfig;
use serde::{Deserialize, Serialize};

/// Measurements and patient details for one completed test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Measured gait speed in metres per second
    pub speed_mps: f64,
    /// Test duration in seconds
    pub time_seconds: f64,
    #[serde(default)]
    pub age: Option<u32>,
    /// `"M"` or `"F"`
    #[serde(default)]
    pub sex: Option<String>,
    /// Free-text diagnosis
    #[serde(default)]
    pub diagnosis: Option<String>,
}

/// Scores and references for one completed test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub fall_risk: FallRiskAssessment,
    /// Name of the profile used to tune the analyzers
    pub profile: String,
    pub profile_display_name: String,
    /// Diagnosis keyword that selected the profile
    pub matched_keyword: Option<String>,
    /// `None` when no normative data applies to the patient
    pub normative: Option<NormativeComparison>,
    pub normative_interpretation: Option<NormInterpretation>,
}

impl AssessmentReport {
    /// Build the report for a request
    ///
    /// When the diagnosis matches no keyword, `config.default_profile` is used
    /// in place of the registry's default as long as it is registered.
    #[must_use]
    pub fn build(
        request: &AssessmentRequest,
        registry: &ProfileRegistry,
        config: &ClinicalConfig,
    ) -> Self {
        let fall_risk = fall_risk::assess(request.speed_mps, request.time_seconds);

        let resolved = registry.resolve_with_match(request.diagnosis.as_deref().unwrap_or(""));
        let profile = if resolved.is_fallback() {
            registry.get(&config.default_profile).unwrap_or_else(|| {
                log::warn!(
                    "Configured default profile '{}' is not registered, using '{}'",
                    config.default_profile,
                    resolved.profile.name
                );
                resolved.profile
            })
        } else {
            resolved.profile
        };

        let normative = match (request.age, request.sex.as_deref()) {
            (Some(age), Some(sex)) => {
                normative::lookup_with_policy(age, sex, config.normative_fallback)
                    .map(|band| NormativeComparison::new(request.speed_mps, band))
            }
            _ => None,
        };

        Self {
            fall_risk,
            profile: profile.name.clone(),
            profile_display_name: profile.display_name.clone(),
            matched_keyword: resolved.keyword.map(str::to_string),
            normative_interpretation: normative.as_ref().map(NormativeComparison::interpretation),
            normative,
        }
    }
}
