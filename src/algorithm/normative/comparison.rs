//! Patient-versus-norm comparison
//!
//! Derived statistics for a measured gait speed against a normative band.
//! Kept apart from the lookup so the table itself stays pure data.

use super::NormativeBand;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;

/// Where a patient's speed falls relative to the norm, at one standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormInterpretation {
    BelowNorm,
    WithinNorm,
    AboveNorm,
}

impl fmt::Display for NormInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::BelowNorm => "below age/sex norm",
            Self::WithinNorm => "within age/sex norm",
            Self::AboveNorm => "above age/sex norm",
        };
        f.write_str(text)
    }
}

/// A measured gait speed expressed against its normative band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormativeComparison {
    pub speed_mps: f64,
    pub mean_speed_mps: f64,
    pub sd_speed_mps: f64,
    /// `(speed - mean) / sd`
    pub z_score: f64,
    /// Position in the reference population, 0-100
    pub percentile: f64,
}

impl NormativeComparison {
    /// Compare a speed against a band
    #[must_use]
    pub fn new(speed_mps: f64, band: &NormativeBand) -> Self {
        let (mean, sd) = band.mean_sd();
        let z_score = (speed_mps - mean) / sd;
        Self {
            speed_mps,
            mean_speed_mps: mean,
            sd_speed_mps: sd,
            z_score,
            percentile: percentile_of(z_score),
        }
    }

    #[must_use]
    pub fn interpretation(&self) -> NormInterpretation {
        if self.z_score < -1.0 {
            NormInterpretation::BelowNorm
        } else if self.z_score > 1.0 {
            NormInterpretation::AboveNorm
        } else {
            NormInterpretation::WithinNorm
        }
    }
}

/// Standard normal percentile of a z-score, `NaN` for a `NaN` input
fn percentile_of(z_score: f64) -> f64 {
    Normal::new(0.0, 1.0).map_or(f64::NAN, |standard| standard.cdf(z_score) * 100.0)
}
