use anyhow::{Context, bail};
use log::info;
use mobility_core::utils::logging::{init_logging, log_assessment_summary};
use mobility_core::{
    AssessmentReport, AssessmentRequest, ClinicalConfig, Landmark, ProfileRegistry, build_frames,
    pose_detection_rate,
};
use std::fs;
use std::io::{self, Read};
use std::time::Instant;

const USAGE: &str = "\
usage:
  mobility-core assess <request.json|-> [config.json]
  mobility-core frames <skeletons.json|-> <fps>
  mobility-core profiles";

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
    }
}

fn assess(request_path: &str, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => ClinicalConfig::from_json_str(&read_input(path)?)
            .with_context(|| format!("Invalid configuration in {path}"))?,
        None => ClinicalConfig::default(),
    };
    info!("{config}");

    let registry = ProfileRegistry::builtin();
    config
        .validate(registry)
        .context("Invalid default_profile in configuration")?;

    let request: AssessmentRequest = serde_json::from_str(&read_input(request_path)?)
        .context("Invalid assessment request")?;

    let report = AssessmentReport::build(&request, registry, &config);
    log_assessment_summary(&report);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn frames(skeletons_path: &str, fps: &str) -> anyhow::Result<()> {
    let fps: f64 = fps
        .parse()
        .with_context(|| format!("Invalid frame rate: {fps}"))?;
    let skeletons: Vec<Option<Vec<Landmark>>> = serde_json::from_str(&read_input(skeletons_path)?)
        .context("Expected a JSON array of skeletons (null for frames without a pose)")?;

    let start = Instant::now();
    let frames = build_frames::<_, Landmark>(&skeletons, fps)?;
    info!(
        "Normalized {} frames in {:?} ({:.1}% with pose)",
        frames.len(),
        start.elapsed(),
        pose_detection_rate(&frames) * 100.0
    );

    println!("{}", serde_json::to_string(&frames)?);
    Ok(())
}

fn profiles() -> anyhow::Result<()> {
    let registry = ProfileRegistry::builtin();
    for (priority, profile) in registry.profiles().iter().enumerate() {
        println!(
            "{:>2}. {:<14} {:<32} {}",
            priority + 1,
            profile.name,
            profile.display_name,
            profile.keywords.join(", ")
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    init_logging("info");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["assess", request] => assess(request, None),
        ["assess", request, config] => assess(request, Some(*config)),
        ["frames", skeletons, fps] => frames(skeletons, fps),
        ["profiles"] => profiles(),
        _ => bail!("{USAGE}"),
    }
}
