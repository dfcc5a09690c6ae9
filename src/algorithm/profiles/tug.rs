//! Timed-Up-and-Go analysis parameters
//!
//! Angles are knee/hip joint angles in degrees. The defaults are the
//! population baseline and must be kept exactly as they are.

use serde::{Deserialize, Serialize};

/// Thresholds driving TUG phase detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TugProfile {
    /// Knee angle below which the patient counts as seated
    pub sitting_angle_threshold: f64,
    /// Knee angle above which the patient counts as standing
    pub standing_angle_threshold: f64,
    /// Wrist-to-knee distance (normalized) under which a hand is treated as supporting
    pub hand_support_threshold: f64,
    /// Shoulder-line rotation (degrees) that marks the start of the turn
    pub turn_deviation_threshold: f64,
    /// Moving-average window (frames) applied to joint angles
    pub angle_smoothing_window: usize,
    /// Minimum number of frames a phase must last to be accepted
    pub min_phase_frames: usize,
}

impl Default for TugProfile {
    fn default() -> Self {
        Self {
            sitting_angle_threshold: 120.0,
            standing_angle_threshold: 160.0,
            hand_support_threshold: 0.15,
            turn_deviation_threshold: 15.0,
            angle_smoothing_window: 5,
            min_phase_frames: 3,
        }
    }
}

impl TugProfile {
    pub(crate) fn check(&self) -> Option<String> {
        if self.angle_smoothing_window == 0 {
            return Some("TUG angle smoothing window must be at least one frame".to_string());
        }
        if self.min_phase_frames == 0 {
            return Some("min_phase_frames must be at least one frame".to_string());
        }
        if !(self.sitting_angle_threshold.is_finite() && self.standing_angle_threshold.is_finite()) {
            return Some("TUG angle thresholds must be finite".to_string());
        }
        if self.sitting_angle_threshold >= self.standing_angle_threshold {
            return Some(format!(
                "sitting angle {} must be below standing angle {}",
                self.sitting_angle_threshold, self.standing_angle_threshold
            ));
        }
        let thresholds = [self.hand_support_threshold, self.turn_deviation_threshold];
        if !thresholds.iter().all(|t| t.is_finite() && *t > 0.0) {
            return Some("TUG thresholds must be positive and finite".to_string());
        }
        None
    }
}
