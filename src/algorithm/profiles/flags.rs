//! Clinical measurement toggles
//!
//! Each flag switches on an optional measurement in the TUG or 10MWT
//! analyzer. All flags default to off and are fixed once a profile is built.

use serde::{Deserialize, Serialize};

/// Optional measurements enabled for a disease profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalFlags {
    // TUG
    /// Time the sit-to-stand transition separately
    pub measure_sit_to_stand: bool,
    /// Time the stand-to-sit transition separately
    pub measure_stand_to_sit: bool,
    /// Detect hands pushing off the thighs or armrests
    pub detect_hand_support: bool,
    /// Time the 180 degree turn
    pub measure_turn_duration: bool,
    /// Count steps taken during the turn
    pub count_turn_steps: bool,
    /// Measure forward trunk flexion while rising
    pub measure_trunk_flexion: bool,
    /// Detect freezing episodes
    pub detect_freezing: bool,
    /// Detect hesitation before gait initiation
    pub detect_hesitation: bool,

    // 10MWT
    /// Left/right step time and length asymmetry
    pub measure_step_asymmetry: bool,
    /// Steps per minute
    pub measure_cadence: bool,
    /// Stride length estimate
    pub measure_stride_length: bool,
    /// Arm swing amplitude
    pub measure_arm_swing: bool,
    /// Detect shuffling (reduced foot clearance)
    pub detect_shuffling: bool,
    /// Detect festination (involuntary acceleration with shortening steps)
    pub detect_festination: bool,
    /// Mediolateral trunk sway
    pub measure_trunk_sway: bool,
}

impl ClinicalFlags {
    /// Total number of flags
    pub const COUNT: usize = 15;

    /// Flags as `(name, value)` pairs in declaration order
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, bool); Self::COUNT] {
        [
            ("measure_sit_to_stand", self.measure_sit_to_stand),
            ("measure_stand_to_sit", self.measure_stand_to_sit),
            ("detect_hand_support", self.detect_hand_support),
            ("measure_turn_duration", self.measure_turn_duration),
            ("count_turn_steps", self.count_turn_steps),
            ("measure_trunk_flexion", self.measure_trunk_flexion),
            ("detect_freezing", self.detect_freezing),
            ("detect_hesitation", self.detect_hesitation),
            ("measure_step_asymmetry", self.measure_step_asymmetry),
            ("measure_cadence", self.measure_cadence),
            ("measure_stride_length", self.measure_stride_length),
            ("measure_arm_swing", self.measure_arm_swing),
            ("detect_shuffling", self.detect_shuffling),
            ("detect_festination", self.detect_festination),
            ("measure_trunk_sway", self.measure_trunk_sway),
        ]
    }

    /// Names of the flags that are switched on
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter_map(|(name, on)| on.then_some(name))
            .collect()
    }

    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.entries().iter().filter(|(_, on)| *on).count()
    }
}
