//! Logging utilities
//!
//! This module provides standardized logging functions. The library itself
//! only emits through the `log` facade; installing a logger is left to the
//! binary.

use crate::report::AssessmentReport;

/// Install `env_logger`, honouring `RUST_LOG` and falling back to `default_filter`
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

/// Log an assessment report with consistent format
///
/// # Arguments
/// * `report` - The assessment report to summarize
pub fn log_assessment_summary(report: &AssessmentReport) {
    log::info!(
        "Fall risk {} ({}/100, speed {} + time {}) using profile '{}'",
        report.fall_risk.level.as_str(),
        report.fall_risk.score,
        report.fall_risk.speed_score,
        report.fall_risk.time_score,
        report.profile
    );

    match &report.normative {
        Some(cmp) => log::info!(
            "Gait speed {:.2} m/s vs norm {:.2} ± {:.2} (z = {:.2}, {:.0}th percentile)",
            cmp.speed_mps,
            cmp.mean_speed_mps,
            cmp.sd_speed_mps,
            cmp.z_score,
            cmp.percentile
        ),
        None => log::info!("No normative data available for this patient"),
    }
}
