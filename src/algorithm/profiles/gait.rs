//! Gait analysis parameters for the 10-meter walk test
//!
//! The defaults are the population baseline tuned for the walk analyzer and
//! must be kept exactly as they are.

use serde::{Deserialize, Serialize};

/// Thresholds driving walk-segment detection and speed estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaitProfile {
    /// Moving-average window (frames) applied to hip velocity
    pub velocity_smoothing_window: usize,
    /// Moving-average window (frames) applied to hip position
    pub position_smoothing_window: usize,
    /// Walking starts once velocity exceeds this percentage of the reference velocity
    pub vel_threshold_pct: f64,
    /// Percentile of the velocity trace taken as the reference velocity
    pub vel_percentile: f64,
    /// Walking ends when velocity drops below threshold divided by this factor
    pub vel_end_factor: f64,
    /// Depth correction applied while the patient walks away from the camera
    pub correction_factor_away: f64,
    /// Depth correction applied while the patient walks toward the camera
    pub correction_factor_toward: f64,
    /// Minimum number of consecutive walking frames for a valid segment
    pub min_walking_frames: usize,
}

impl Default for GaitProfile {
    fn default() -> Self {
        Self {
            velocity_smoothing_window: 5,
            position_smoothing_window: 3,
            vel_threshold_pct: 27.0,
            vel_percentile: 82.0,
            vel_end_factor: 1.7,
            correction_factor_away: 2.4974,
            correction_factor_toward: 0.63,
            min_walking_frames: 10,
        }
    }
}

impl GaitProfile {
    /// Check the bundle for values the analyzer cannot work with
    ///
    /// Returns a description of the first problem found.
    pub(crate) fn check(&self) -> Option<String> {
        if self.velocity_smoothing_window == 0 || self.position_smoothing_window == 0 {
            return Some("gait smoothing windows must be at least one frame".to_string());
        }
        if self.min_walking_frames == 0 {
            return Some("min_walking_frames must be at least one frame".to_string());
        }
        if !(0.0..=100.0).contains(&self.vel_threshold_pct) {
            return Some(format!(
                "vel_threshold_pct {} is outside 0-100",
                self.vel_threshold_pct
            ));
        }
        if !(0.0..=100.0).contains(&self.vel_percentile) {
            return Some(format!(
                "vel_percentile {} is outside 0-100",
                self.vel_percentile
            ));
        }
        let factors = [
            self.vel_end_factor,
            self.correction_factor_away,
            self.correction_factor_toward,
        ];
        if !factors.iter().all(|f| f.is_finite() && *f > 0.0) {
            return Some("gait factors must be positive and finite".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_passes_check() {
        assert_eq!(GaitProfile::default().check(), None);
    }

    #[test]
    fn test_zero_walking_frames_rejected() {
        let gait = GaitProfile {
            min_walking_frames: 0,
            ..GaitProfile::default()
        };
        assert!(gait.check().is_some());
    }

    #[test]
    fn test_non_finite_factors_rejected() {
        for bad in [f64::NAN, f64::INFINITY] {
            let gait = GaitProfile {
                correction_factor_away: bad,
                ..GaitProfile::default()
            };
            assert!(gait.check().is_some(), "accepted correction factor {bad}");
        }
        let gait = GaitProfile {
            vel_percentile: f64::NAN,
            ..GaitProfile::default()
        };
        assert!(gait.check().is_some());
    }
}
