use clap::Parser;
use orrery::cli::{self, Args};
use orrery::simulation::Simulation;
use tracing::Level;

fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries exactly the two energy lines.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let config = cli::load_and_apply_config(&args);
    let steps = cli::resolve_steps(&args, &config);

    let mut simulation = Simulation::solar_system(&config);
    simulation.offset_momentum();

    println!("{:.9}", simulation.total_energy());
    simulation.run(steps);
    println!("{:.9}", simulation.total_energy());
}
