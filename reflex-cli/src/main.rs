mod sim;

use std::env;
use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use reflex_trainer::TrainerConfig;
use sim::{run_session, PlayerProfile};

/// Usage: reflex-cli [CONFIG.json] [TRIALS] [SEED]
///
/// Runs a headless training session with a simulated player and prints the
/// session report as JSON on stdout.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match args.first() {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<TrainerConfig>(&text)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => TrainerConfig::default(),
    };
    let trials: u32 = match args.get(1) {
        Some(raw) => raw.parse().context("trial count must be an integer")?,
        None => 50,
    };
    let seed: u64 = match args.get(2) {
        Some(raw) => raw.parse().context("seed must be an integer")?,
        None => 0xC0FF_EE,
    };

    info!(trials, seed, "starting headless session");
    let report = run_session(&config, &PlayerProfile::default(), seed, trials);

    if let Some(avg) = report.summary.avg_hit_latency_ms {
        info!(avg_hit_latency_ms = avg, "hit latency");
    }
    if let Some(avg) = report.summary.avg_first_move_ms {
        info!(avg_first_move_ms = avg, "orientation latency");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
