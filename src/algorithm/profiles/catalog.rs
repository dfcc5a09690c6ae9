//! Built-in disease profile catalog
//!
//! Profiles are listed in matching priority order. A diagnosis mentioning
//! both a stroke and a knee problem resolves to the stroke profile because
//! stroke is registered first. The general profile comes last, carries no
//! keywords and holds the population baseline.

use super::flags::ClinicalFlags;
use super::gait::GaitProfile;
use super::tug::TugProfile;
use super::DiseaseProfile;

/// Name of the built-in fallback profile
pub const GENERAL_PROFILE: &str = "general";

/// The built-in profiles in priority order, general profile last
#[must_use]
pub fn builtin_profiles() -> Vec<DiseaseProfile> {
    vec![
        parkinsons(),
        stroke(),
        vestibular(),
        orthopedic(),
        elderly_frail(),
        general(),
    ]
}

fn parkinsons() -> DiseaseProfile {
    DiseaseProfile::new("parkinsons", "Parkinson's disease")
        .with_keywords(["parkinson", "파킨슨", "lewy body"])
        .with_gait(GaitProfile {
            velocity_smoothing_window: 7,
            vel_threshold_pct: 20.0,
            vel_percentile: 75.0,
            vel_end_factor: 1.5,
            min_walking_frames: 15,
            ..GaitProfile::default()
        })
        .with_tug(TugProfile {
            turn_deviation_threshold: 10.0,
            min_phase_frames: 5,
            ..TugProfile::default()
        })
        .with_flags(ClinicalFlags {
            measure_turn_duration: true,
            count_turn_steps: true,
            detect_freezing: true,
            detect_hesitation: true,
            measure_cadence: true,
            measure_stride_length: true,
            measure_arm_swing: true,
            detect_shuffling: true,
            detect_festination: true,
            ..ClinicalFlags::default()
        })
        .with_description(
            "Short shuffling steps, freezing and en-bloc turns. Wider smoothing and a \
             lower start threshold keep slow initiation inside the walk segment.",
        )
}

fn stroke() -> DiseaseProfile {
    DiseaseProfile::new("stroke", "Stroke / hemiparesis")
        .with_keywords([
            "stroke",
            "cva",
            "cerebral infarction",
            "hemipleg",
            "hemipar",
            "뇌졸중",
            "뇌경색",
            "뇌출혈",
            "편마비",
        ])
        .with_gait(GaitProfile {
            velocity_smoothing_window: 7,
            vel_threshold_pct: 22.0,
            vel_percentile: 78.0,
            ..GaitProfile::default()
        })
        .with_tug(TugProfile {
            hand_support_threshold: 0.2,
            ..TugProfile::default()
        })
        .with_flags(ClinicalFlags {
            measure_sit_to_stand: true,
            detect_hand_support: true,
            measure_trunk_flexion: true,
            measure_step_asymmetry: true,
            measure_stride_length: true,
            ..ClinicalFlags::default()
        })
        .with_description(
            "Hemiparetic gait with left/right asymmetry and frequent hand support \
             when rising.",
        )
}

fn vestibular() -> DiseaseProfile {
    DiseaseProfile::new("vestibular", "Vestibular disorder")
        .with_keywords([
            "vestibular",
            "vertigo",
            "dizziness",
            "bppv",
            "meniere",
            "전정",
            "어지럼",
        ])
        .with_tug(TugProfile {
            turn_deviation_threshold: 12.0,
            ..TugProfile::default()
        })
        .with_flags(ClinicalFlags {
            measure_turn_duration: true,
            count_turn_steps: true,
            measure_trunk_sway: true,
            ..ClinicalFlags::default()
        })
        .with_description(
            "Instability during head and trunk rotation. Turn detection is more \
             sensitive and trunk sway is measured during the walk.",
        )
}

fn orthopedic() -> DiseaseProfile {
    DiseaseProfile::new("orthopedic", "Knee / hip orthopedic condition")
        .with_keywords([
            "knee",
            "hip",
            "arthroplasty",
            "arthritis",
            "fracture",
            "슬관절",
            "고관절",
            "관절염",
            "골절",
        ])
        .with_tug(TugProfile {
            sitting_angle_threshold: 110.0,
            standing_angle_threshold: 155.0,
            ..TugProfile::default()
        })
        .with_flags(ClinicalFlags {
            measure_sit_to_stand: true,
            measure_stand_to_sit: true,
            detect_hand_support: true,
            measure_step_asymmetry: true,
            ..ClinicalFlags::default()
        })
        .with_description(
            "Reduced joint range of motion. Sitting and standing angles are relaxed \
             to match limited knee flexion and extension.",
        )
}

fn elderly_frail() -> DiseaseProfile {
    DiseaseProfile::new("elderly_frail", "Frailty / fall history")
        .with_keywords(["frail", "sarcopenia", "fall", "노쇠", "근감소", "낙상"])
        .with_gait(GaitProfile {
            vel_threshold_pct: 24.0,
            ..GaitProfile::default()
        })
        .with_flags(ClinicalFlags {
            measure_sit_to_stand: true,
            detect_hand_support: true,
            measure_cadence: true,
            measure_trunk_sway: true,
            ..ClinicalFlags::default()
        })
        .with_description("Globally slowed gait with reduced lower-limb strength.")
}

fn general() -> DiseaseProfile {
    DiseaseProfile::new(GENERAL_PROFILE, "General")
        .with_description("Population baseline used when no diagnosis-specific profile applies.")
}
