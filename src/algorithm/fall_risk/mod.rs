//! Fall risk scoring
//!
//! Gait speed and test duration each earn one of four discrete component
//! scores (10, 25, 40 or 50). Their sum is banded into a risk level. The
//! scoring is deliberately coarse; there is no continuous formula.

pub mod level;

use serde::Serialize;

pub use level::RiskLevel;

/// Speed bands as `(minimum speed in m/s, score)`, checked from the top
const SPEED_BANDS: [(f64, u32); 3] = [(1.2, 50), (1.0, 40), (0.8, 25)];

/// Time bands as `(maximum duration in s, score)`, checked from the bottom
const TIME_BANDS: [(f64, u32); 3] = [(8.3, 50), (10.0, 40), (12.5, 25)];

/// Component score when no band is satisfied
const LOWEST_BAND_SCORE: u32 = 10;

/// Fall risk score with its band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallRiskAssessment {
    /// Total score, 20-100
    pub score: u32,
    pub speed_score: u32,
    pub time_score: u32,
    pub level: RiskLevel,
    pub label: &'static str,
    pub label_en: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// Score a gait speed in metres per second
///
/// Lower band bounds are inclusive. Negative or `NaN` speeds fall through to
/// the lowest band.
#[must_use]
pub fn speed_score(speed_mps: f64) -> u32 {
    SPEED_BANDS
        .iter()
        .find(|(min_speed, _)| speed_mps >= *min_speed)
        .map_or(LOWEST_BAND_SCORE, |&(_, score)| score)
}

/// Score a test duration in seconds
///
/// Upper band bounds are inclusive. `NaN` durations fall through to the
/// lowest band.
#[must_use]
pub fn time_score(time_seconds: f64) -> u32 {
    TIME_BANDS
        .iter()
        .find(|(max_time, _)| time_seconds <= *max_time)
        .map_or(LOWEST_BAND_SCORE, |&(_, score)| score)
}

/// Combined score, `speed_score + time_score`
#[must_use]
pub fn total_score(speed_mps: f64, time_seconds: f64) -> u32 {
    speed_score(speed_mps) + time_score(time_seconds)
}

/// Risk band for a total score
#[must_use]
pub const fn risk_level(score: u32) -> RiskLevel {
    RiskLevel::from_score(score)
}

/// Score a completed walk or TUG test
#[must_use]
pub fn assess(speed_mps: f64, time_seconds: f64) -> FallRiskAssessment {
    let speed_score = speed_score(speed_mps);
    let time_score = time_score(time_seconds);
    let score = speed_score + time_score;
    let level = risk_level(score);

    FallRiskAssessment {
        score,
        speed_score,
        time_score,
        level,
        label: level.label(),
        label_en: level.label_en(),
        color: level.color(),
        description: level.description(),
    }
}
