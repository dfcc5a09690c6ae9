//! Diagnosis to profile resolution
//!
//! The registry holds profiles in an explicit priority order. Resolution scans
//! that order and returns the first profile with a keyword occurring in the
//! diagnosis text (case-insensitive). When nothing matches, the designated
//! default profile is returned; resolution never fails.

use super::catalog::{builtin_profiles, GENERAL_PROFILE};
use super::DiseaseProfile;
use crate::error::{MobilityError, Result};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<ProfileRegistry> = LazyLock::new(ProfileRegistry::default);

/// Outcome of resolving a diagnosis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileMatch<'a> {
    /// The resolved profile
    pub profile: &'a DiseaseProfile,
    /// Keyword that selected it, `None` when the default profile was used
    pub keyword: Option<&'a str>,
}

impl ProfileMatch<'_> {
    /// Whether resolution fell back to the default profile
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.keyword.is_none()
    }
}

/// Read-only catalog of disease profiles in matching priority order
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<DiseaseProfile>,
    /// Lowercased keywords, parallel to `profiles`
    keywords_lower: Vec<Vec<String>>,
    index: FxHashMap<String, usize>,
    default_index: usize,
}

impl Default for ProfileRegistry {
    /// The built-in catalog with `general` as the default profile
    fn default() -> Self {
        let profiles = builtin_profiles();
        let default_index = profiles
            .iter()
            .position(|p| p.name == GENERAL_PROFILE)
            .unwrap_or(profiles.len() - 1);
        Self::assemble(profiles, default_index)
    }
}

impl ProfileRegistry {
    /// Build a registry from profiles listed in priority order
    ///
    /// `default_profile` names the profile returned when no keyword matches.
    /// Fails if a profile is malformed, two profiles share a name, or the
    /// default is not among the profiles.
    pub fn new(profiles: Vec<DiseaseProfile>, default_profile: &str) -> Result<Self> {
        for profile in &profiles {
            validate_profile(profile)?;
        }

        if let Some(duplicate) = profiles.iter().map(|p| p.name.as_str()).duplicates().next() {
            log::warn!("Profile catalog lists '{duplicate}' more than once");
            return Err(MobilityError::DuplicateProfile(duplicate.to_string()));
        }

        let Some(default_index) = profiles.iter().position(|p| p.name == default_profile) else {
            log::warn!("Default profile '{default_profile}' missing from catalog");
            return Err(MobilityError::MissingDefaultProfile(default_profile.to_string()));
        };

        Ok(Self::assemble(profiles, default_index))
    }

    /// Build a registry from a JSON array of profiles
    ///
    /// Threshold fields left out of a profile take the baseline defaults.
    pub fn from_json_str(json: &str, default_profile: &str) -> Result<Self> {
        let profiles: Vec<DiseaseProfile> = serde_json::from_str(json)?;
        Self::new(profiles, default_profile)
    }

    /// The process-wide built-in registry
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn assemble(profiles: Vec<DiseaseProfile>, default_index: usize) -> Self {
        let index = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        let keywords_lower = profiles.iter().map(DiseaseProfile::lowercase_keywords).collect();
        Self {
            profiles,
            keywords_lower,
            index,
            default_index,
        }
    }

    /// Resolve a free-text diagnosis to a profile
    #[must_use]
    pub fn resolve(&self, diagnosis: &str) -> &DiseaseProfile {
        self.resolve_with_match(diagnosis).profile
    }

    /// Resolve a free-text diagnosis, reporting which keyword matched
    #[must_use]
    pub fn resolve_with_match(&self, diagnosis: &str) -> ProfileMatch<'_> {
        let diagnosis_lower = diagnosis.to_lowercase();

        for (profile, keywords_lower) in self.profiles.iter().zip(&self.keywords_lower) {
            if let Some(keyword) = profile.matching_keyword(keywords_lower, &diagnosis_lower) {
                log::debug!(
                    "Diagnosis '{diagnosis}' matched profile '{}' on keyword '{keyword}'",
                    profile.name
                );
                return ProfileMatch {
                    profile,
                    keyword: Some(keyword),
                };
            }
        }

        let profile = self.default_profile();
        log::debug!(
            "Diagnosis '{diagnosis}' matched no profile, using '{}'",
            profile.name
        );
        ProfileMatch {
            profile,
            keyword: None,
        }
    }

    /// Look up a profile by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DiseaseProfile> {
        self.index.get(name).map(|&i| &self.profiles[i])
    }

    /// Look up a profile by name, failing if it is not registered
    pub fn require(&self, name: &str) -> Result<&DiseaseProfile> {
        self.get(name)
            .ok_or_else(|| MobilityError::UnknownProfile(name.to_string()))
    }

    /// Profile used when no keyword matches
    #[must_use]
    pub fn default_profile(&self) -> &DiseaseProfile {
        &self.profiles[self.default_index]
    }

    /// All profiles in priority order
    #[must_use]
    pub fn profiles(&self) -> &[DiseaseProfile] {
        &self.profiles
    }

    /// Profile names in priority order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn validate_profile(profile: &DiseaseProfile) -> Result<()> {
    let reason = if profile.name.trim().is_empty() {
        Some("name must not be empty".to_string())
    } else if profile.keywords.iter().any(|k| k.trim().is_empty()) {
        // An empty keyword would match every diagnosis
        Some("keywords must not be empty".to_string())
    } else {
        profile.gait.check().or_else(|| profile.tug.check())
    };

    match reason {
        Some(reason) => {
            log::warn!("Rejecting profile '{}': {reason}", profile.name);
            Err(MobilityError::invalid_profile(&profile.name, reason))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let registry = ProfileRegistry::default();
        let rebuilt = ProfileRegistry::new(registry.profiles().to_vec(), GENERAL_PROFILE);
        assert!(rebuilt.is_ok());
        assert_eq!(registry.default_profile().name, GENERAL_PROFILE);
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let profiles = vec![
            DiseaseProfile::new("broad", "Broad").with_keywords(["  "]),
            DiseaseProfile::new("general", "General"),
        ];
        let err = ProfileRegistry::new(profiles, "general").unwrap_err();
        assert!(matches!(err, MobilityError::InvalidProfile { .. }));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let profiles = vec![
            DiseaseProfile::new("general", "General"),
            DiseaseProfile::new("general", "General again"),
        ];
        let err = ProfileRegistry::new(profiles, "general").unwrap_err();
        assert!(matches!(err, MobilityError::DuplicateProfile(name) if name == "general"));
    }

    #[test]
    fn test_missing_default_rejected() {
        let profiles = vec![DiseaseProfile::new("stroke", "Stroke").with_keywords(["stroke"])];
        let err = ProfileRegistry::new(profiles, "general").unwrap_err();
        assert!(matches!(err, MobilityError::MissingDefaultProfile(_)));
    }

    #[test]
    fn test_uppercase_keyword_matches_and_is_reported_as_written() {
        let profiles = vec![
            DiseaseProfile::new("ataxia", "Ataxia").with_keywords(["ATAXIA", "Cerebellar"]),
            DiseaseProfile::new("general", "General"),
        ];
        let registry = ProfileRegistry::new(profiles, "general").unwrap();

        let resolved = registry.resolve_with_match("spinocerebellar ataxia type 3");
        assert_eq!(resolved.profile.name, "ataxia");
        assert_eq!(resolved.keyword, Some("ATAXIA"));
        assert_eq!(
            registry.resolve_with_match("cerebellar degeneration").keyword,
            Some("Cerebellar")
        );
        assert_eq!(registry.resolve_with_match("ATAXIC GAIT").keyword, None);
    }

    #[test]
    fn test_nan_tug_angle_rejected_at_construction() {
        use crate::algorithm::profiles::TugProfile;

        let tug = TugProfile {
            sitting_angle_threshold: f64::NAN,
            ..TugProfile::default()
        };
        let profiles = vec![
            DiseaseProfile::new("broken", "Broken").with_keywords(["broken"]).with_tug(tug),
            DiseaseProfile::new("general", "General"),
        ];
        let err = ProfileRegistry::new(profiles, "general").unwrap_err();
        assert!(matches!(err, MobilityError::InvalidProfile { name, .. } if name == "broken"));
    }

    #[test]
    fn test_zero_walking_frames_rejected_from_json() {
        let json = r#"[{"name": "general", "display_name": "General", "gait": {"min_walking_frames": 0}}]"#;
        let err = ProfileRegistry::from_json_str(json, "general").unwrap_err();
        assert!(matches!(err, MobilityError::InvalidProfile { .. }));
    }
}
