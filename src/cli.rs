//! Command line interface for orrery

use clap::Parser;
use tracing::info;

use crate::config::SimulationConfig;

/// Orrery - deterministic solar-system energy benchmark
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of integration steps; a value that doesn't parse as an
    /// integer silently falls back to the configured default
    #[arg(value_name = "STEPS")]
    pub steps: Option<String>,

    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Time step in years (overrides config file)
    #[arg(long, value_name = "YEARS")]
    pub dt: Option<f64>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> SimulationConfig {
    let mut config = if let Some(config_path) = &args.config {
        info!("loading configuration from {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::default()
    };

    if let Some(dt) = args.dt {
        info!("overriding time step to {dt}");
        config.physics.dt = dt;
    }

    config
}

/// Resolve the step count from the positional argument.
///
/// A missing or unparseable argument yields the configured default; a bad
/// value is not treated as an error.
pub fn resolve_steps(args: &Args, config: &SimulationConfig) -> usize {
    args.steps
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(config.physics.steps)
}
