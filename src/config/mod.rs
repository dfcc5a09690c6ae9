//! Configuration for mobility-core.
//!
//! Configuration is always passed explicitly; nothing in the library reads
//! process environment state.

use crate::algorithm::normative::NormativeFallback;
use crate::algorithm::profiles::{GENERAL_PROFILE, ProfileRegistry};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy knobs for building assessment reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalConfig {
    /// What to report when the patient's age is outside the normative table
    pub normative_fallback: NormativeFallback,
    /// Profile used when a diagnosis matches no keyword
    ///
    /// Takes precedence over the registry's own default profile when a report
    /// is built. It must name a registered profile; check it with
    /// [`ClinicalConfig::validate`] before use. An unregistered name is
    /// ignored with a warning and the registry default applies instead.
    pub default_profile: String,
}

impl Default for ClinicalConfig {
    fn default() -> Self {
        Self {
            normative_fallback: NormativeFallback::Unavailable,
            default_profile: GENERAL_PROFILE.to_string(),
        }
    }
}

impl ClinicalConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration document; omitted fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the configuration against the registry it will be used with
    pub fn validate(&self, registry: &ProfileRegistry) -> Result<()> {
        registry.require(&self.default_profile).map(|_| ())
    }

    #[must_use]
    pub fn with_normative_fallback(mut self, fallback: NormativeFallback) -> Self {
        self.normative_fallback = fallback;
        self
    }

    #[must_use]
    pub fn with_default_profile(mut self, name: impl Into<String>) -> Self {
        self.default_profile = name.into();
        self
    }
}

impl fmt::Display for ClinicalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clinical Configuration:")?;
        writeln!(f, "  Normative Fallback: {:?}", self.normative_fallback)?;
        writeln!(f, "  Default Profile: {}", self.default_profile)
    }
}
