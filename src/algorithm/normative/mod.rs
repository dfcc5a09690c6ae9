//! Gait speed normative data
//!
//! Looks up the population mean and standard deviation of comfortable gait
//! speed for a patient's age and sex. The lookup only returns the raw band;
//! z-scores and percentiles live in [`comparison`] on the caller side.
//!
//! Ages outside 20-99 and sex codes other than `"M"`/`"F"` have no normative
//! data. [`lookup`] reports them as `None`; [`lookup_with_policy`] can instead
//! clamp the age into the covered range.

pub mod comparison;
pub mod table;

use crate::error::MobilityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use comparison::{NormInterpretation, NormativeComparison};
pub use table::{MAX_COVERED_AGE, MIN_COVERED_AGE, NORMATIVE_BANDS};

/// Biological sex as recorded for normative comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Parse the `"M"` / `"F"` code, `None` for anything else
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sex {
    type Err = MobilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| MobilityError::InvalidSex(s.to_string()))
    }
}

/// Population reference for one age band and sex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormativeBand {
    /// Inclusive `(min_age, max_age)`
    pub age_range: (u32, u32),
    pub sex: Sex,
    pub mean_speed_mps: f64,
    pub sd_speed_mps: f64,
}

impl NormativeBand {
    /// Whether this band applies to the given age and sex
    #[must_use]
    pub fn covers(&self, age: u32, sex: Sex) -> bool {
        let (min_age, max_age) = self.age_range;
        self.sex == sex && (min_age..=max_age).contains(&age)
    }

    /// `(mean, sd)` in metres per second
    #[must_use]
    pub const fn mean_sd(&self) -> (f64, f64) {
        (self.mean_speed_mps, self.sd_speed_mps)
    }
}

/// What to do when the patient's age is outside the normative table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormativeFallback {
    /// Report that no normative data is available
    #[default]
    Unavailable,
    /// Use the youngest or oldest band instead
    NearestBand,
}

/// Band for an age and parsed sex, `None` outside the covered ages
#[must_use]
pub fn lookup_band(age: u32, sex: Sex) -> Option<&'static NormativeBand> {
    NORMATIVE_BANDS.iter().find(|band| band.covers(age, sex))
}

/// Band for an age and `"M"` / `"F"` sex code
///
/// Returns `None` when the age is outside 20-99 or the sex code is unknown.
#[must_use]
pub fn lookup(age: u32, sex: &str) -> Option<&'static NormativeBand> {
    lookup_with_policy(age, sex, NormativeFallback::Unavailable)
}

/// Band lookup with an explicit policy for ages outside the table
///
/// An unknown sex code is never resolved, whatever the policy.
#[must_use]
pub fn lookup_with_policy(
    age: u32,
    sex: &str,
    fallback: NormativeFallback,
) -> Option<&'static NormativeBand> {
    let Some(sex) = Sex::from_code(sex) else {
        log::debug!("No normative data for sex code '{sex}'");
        return None;
    };

    let age = match fallback {
        NormativeFallback::Unavailable => age,
        NormativeFallback::NearestBand => age.clamp(MIN_COVERED_AGE, MAX_COVERED_AGE),
    };

    let band = lookup_band(age, sex);
    if band.is_none() {
        log::debug!("No normative data for age {age} ({sex})");
    }
    band
}
