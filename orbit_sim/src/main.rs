use std::{error::Error, path::PathBuf};

use clap::Parser;
use forces::{constants::EARTH_RADIUS, position, velocity};
use tracing::{Level, info};

mod scenario;
use scenario::Scenario;

/// Propagates an orbit under the perturbing forces listed in a RON scenario.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the scenario file
    scenario: PathBuf,
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let scenario = Scenario::from_file(&cli.scenario)?;
    let set = scenario.force_set()?;
    info!("loaded {} from {}", set, cli.scenario.display());

    let x0 = scenario.initial_state();
    println!("{set}");
    println!("order of magnitude at t0 (log10 km/s^2):");
    let mut magnitude: Vec<(String, f64)> = set.magnitude(&x0).into_iter().collect();
    magnitude.sort_by(|a, b| b.1.total_cmp(&a.1));
    for (name, order) in &magnitude {
        println!("  {name:>10}  {order:8.3}");
    }

    let result = scenario.run(&set)?;
    if let Some((t, x)) = result.last_valid() {
        let r = position(x);
        let v = velocity(x);
        println!(
            "t = {t:.1} s  altitude = {:.3} km  speed = {:.6} km/s",
            r.magnitude() - EARTH_RADIUS,
            v.magnitude()
        );
        println!(
            "  r = [{:.3}, {:.3}, {:.3}] km  v = [{:.6}, {:.6}, {:.6}] km/s",
            r.x, r.y, r.z, v.x, v.y, v.z
        );
    }
    match result.interruption {
        Some(interruption) => println!(
            "interrupted at t = {:.1} s, {} of {} samples computed",
            interruption.t,
            result.valid_len(),
            result.len()
        ),
        None => println!("completed {} samples", result.len()),
    }
    Ok(())
}

