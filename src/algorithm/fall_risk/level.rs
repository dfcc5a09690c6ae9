//! Fall risk bands
//!
//! Reports and dashboards render directly off the level keys, labels and
//! colours below, so they are part of the public contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical fall risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score 90-100
    Normal,
    /// Score 70-89
    Mild,
    /// Score 50-69
    Moderate,
    /// Score below 50
    High,
}

impl RiskLevel {
    /// Band for a total score; bounds are inclusive and checked from the top
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::Normal
        } else if score >= 70 {
            Self::Mild
        } else if score >= 50 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Machine key (e.g. `"moderate"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Label shown in the clinic UI
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "정상",
            Self::Mild => "경도 위험",
            Self::Moderate => "중등도 위험",
            Self::High => "고위험",
        }
    }

    /// English label
    #[must_use]
    pub const fn label_en(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Mild => "Mild Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Normal => "green",
            Self::Mild => "blue",
            Self::Moderate => "orange",
            Self::High => "red",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Normal => "Gait speed and mobility within normal limits. Routine follow-up.",
            Self::Mild => "Slightly reduced mobility. Consider balance and strength exercises.",
            Self::Moderate => {
                "Reduced mobility with increased fall risk. Targeted rehabilitation recommended."
            }
            Self::High => {
                "High fall risk. Supervised ambulation and a fall-prevention plan are advised."
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_en())
    }
}
