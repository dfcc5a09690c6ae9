//! Comfortable gait speed norms by age decade and sex
//!
//! Means and standard deviations in metres per second for healthy adults.
//! Bands are non-overlapping within each sex and cover ages 20 to 99; the
//! last band spans 80-99.

use super::{NormativeBand, Sex};

/// Youngest age covered by the table
pub const MIN_COVERED_AGE: u32 = 20;
/// Oldest age covered by the table
pub const MAX_COVERED_AGE: u32 = 99;

const fn band(min_age: u32, max_age: u32, sex: Sex, mean: f64, sd: f64) -> NormativeBand {
    NormativeBand {
        age_range: (min_age, max_age),
        sex,
        mean_speed_mps: mean,
        sd_speed_mps: sd,
    }
}

/// Reference bands, men first, each sex in ascending age order
pub static NORMATIVE_BANDS: [NormativeBand; 14] = [
    band(20, 29, Sex::Male, 1.36, 0.17),
    band(30, 39, Sex::Male, 1.43, 0.18),
    band(40, 49, Sex::Male, 1.43, 0.17),
    band(50, 59, Sex::Male, 1.43, 0.18),
    band(60, 69, Sex::Male, 1.34, 0.20),
    band(70, 79, Sex::Male, 1.26, 0.21),
    band(80, 99, Sex::Male, 0.97, 0.20),
    band(20, 29, Sex::Female, 1.34, 0.19),
    band(30, 39, Sex::Female, 1.34, 0.20),
    band(40, 49, Sex::Female, 1.39, 0.16),
    band(50, 59, Sex::Female, 1.31, 0.21),
    band(60, 69, Sex::Female, 1.24, 0.21),
    band(70, 79, Sex::Female, 1.13, 0.21),
    band(80, 99, Sex::Female, 0.94, 0.18),
];
