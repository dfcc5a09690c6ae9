#[cfg(test)]
mod tests {
    use mobility_core::algorithm::profiles::GENERAL_PROFILE;
    use mobility_core::{DiseaseProfile, GaitProfile, MobilityError, ProfileRegistry, TugProfile};

    #[test]
    fn test_baseline_defaults() {
        let gait = GaitProfile::default();
        assert_eq!(gait.vel_threshold_pct, 27.0);
        assert_eq!(gait.vel_percentile, 82.0);
        assert_eq!(gait.vel_end_factor, 1.7);
        assert_eq!(gait.correction_factor_away, 2.4974);
        assert_eq!(gait.correction_factor_toward, 0.63);

        let tug = TugProfile::default();
        assert_eq!(tug.sitting_angle_threshold, 120.0);
        assert_eq!(tug.standing_angle_threshold, 160.0);
        assert_eq!(tug.hand_support_threshold, 0.15);
        assert_eq!(tug.turn_deviation_threshold, 15.0);
    }

    #[test]
    fn test_empty_diagnosis_resolves_default() {
        let registry = ProfileRegistry::builtin();
        let first = registry.resolve("");
        let second = registry.resolve("");

        assert_eq!(first.name, GENERAL_PROFILE);
        assert_eq!(first, second);
        assert_eq!(first.gait, GaitProfile::default());
        assert_eq!(first.tug, TugProfile::default());
        assert_eq!(first.clinical_flags.enabled_count(), 0);
    }

    #[test]
    fn test_unmatched_diagnosis_resolves_default() {
        let registry = ProfileRegistry::builtin();
        let matched = registry.resolve_with_match("Type 2 diabetes mellitus");

        assert!(matched.is_fallback());
        assert_eq!(matched.profile.name, GENERAL_PROFILE);
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let registry = ProfileRegistry::builtin();

        assert_eq!(registry.resolve("PARKINSON'S DISEASE").name, "parkinsons");
        assert_eq!(registry.resolve("Left hemiparesis after MCA infarct").name, "stroke");
        assert_eq!(registry.resolve("BPPV, right posterior canal").name, "vestibular");
        assert_eq!(registry.resolve("s/p total knee arthroplasty").name, "orthopedic");
        assert_eq!(registry.resolve("파킨슨병").name, "parkinsons");
        assert_eq!(registry.resolve("우측 편마비").name, "stroke");
    }

    #[test]
    fn test_registration_order_breaks_ties() {
        let registry = ProfileRegistry::builtin();
        // Mentions both a stroke and a hip fracture; stroke is registered first
        let matched = registry.resolve_with_match("Hip fracture, prior stroke");

        assert_eq!(matched.profile.name, "stroke");
        assert_eq!(matched.keyword, Some("stroke"));
    }

    #[test]
    fn test_priority_order_is_explicit() {
        let names: Vec<&str> = ProfileRegistry::builtin().names().collect();
        assert_eq!(
            names,
            vec!["parkinsons", "stroke", "vestibular", "orthopedic", "elderly_frail", "general"]
        );
    }

    #[test]
    fn test_disease_profiles_differ_from_baseline() {
        let registry = ProfileRegistry::builtin();
        let parkinsons = registry.get("parkinsons").unwrap();

        assert!(parkinsons.clinical_flags.detect_freezing);
        assert!(parkinsons.tug.turn_deviation_threshold < TugProfile::default().turn_deviation_threshold);
        assert_ne!(parkinsons.gait, GaitProfile::default());
    }

    #[test]
    fn test_custom_registry_order() {
        let profiles = vec![
            DiseaseProfile::new("ms", "Multiple sclerosis").with_keywords(["sclerosis"]),
            DiseaseProfile::new("als", "ALS").with_keywords(["amyotrophic lateral sclerosis"]),
            DiseaseProfile::new("baseline", "Baseline"),
        ];
        let registry = ProfileRegistry::new(profiles, "baseline").unwrap();

        // The broader keyword is registered first and wins
        assert_eq!(registry.resolve("Amyotrophic lateral sclerosis").name, "ms");
        assert_eq!(registry.resolve("unknown").name, "baseline");
    }

    #[test]
    fn test_registry_from_json() {
        let json = r#"[
            {
                "name": "cerebellar",
                "display_name": "Cerebellar ataxia",
                "keywords": ["ataxia"],
                "tug": { "turn_deviation_threshold": 11.0 },
                "clinical_flags": { "measure_trunk_sway": true }
            },
            { "name": "general", "display_name": "General" }
        ]"#;
        let registry = ProfileRegistry::from_json_str(json, "general").unwrap();
        let profile = registry.resolve("Spinocerebellar ATAXIA type 3");

        assert_eq!(profile.name, "cerebellar");
        assert_eq!(profile.tug.turn_deviation_threshold, 11.0);
        assert_eq!(profile.tug.sitting_angle_threshold, 120.0);
        assert_eq!(profile.gait, GaitProfile::default());
        assert!(profile.clinical_flags.measure_trunk_sway);
    }

    #[test]
    fn test_invalid_json_catalogs() {
        assert!(matches!(
            ProfileRegistry::from_json_str("not json", "general"),
            Err(MobilityError::Json(_))
        ));

        let bad_angles = r#"[{
            "name": "general",
            "display_name": "General",
            "tug": { "sitting_angle_threshold": 170.0 }
        }]"#;
        assert!(matches!(
            ProfileRegistry::from_json_str(bad_angles, "general"),
            Err(MobilityError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn test_require_unknown_profile() {
        let err = ProfileRegistry::builtin().require("cardiac").unwrap_err();
        assert_eq!(err.to_string(), "Unknown profile: cardiac");
    }
}
