//! Headless trainer.
//!
//! Runs generations as fast as the CPU allows and optionally writes the
//! per-generation history as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use neuroflap::simulation::params::Params;
use neuroflap::simulation::world::World;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "train")]
#[command(version)]
#[command(about = "Evolve flappy-bird brains without a window")]
struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of generations to run
    #[arg(short, long, default_value = "50")]
    generations: u32,

    /// Birds per generation (overrides the config)
    #[arg(short, long)]
    population: Option<usize>,

    /// Stop after this many ticks even if generations remain
    #[arg(long, default_value = "10000000")]
    max_ticks: u64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write the generation history to this JSON file
    #[arg(short, long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut params = match &cli.config {
        Some(path) => Params::load_from_file(path)?,
        None => Params::default(),
    };
    params.apply_overrides(cli.population, false)?;

    log::info!(
        "training {} generations of {} birds",
        cli.generations,
        params.population
    );

    let start = Instant::now();
    let mut world = match cli.seed {
        Some(seed) => World::seeded(params, seed),
        None => World::new(params),
    };
    let mut ticks: u64 = 0;

    while world.stats.generations < cli.generations {
        if ticks >= cli.max_ticks {
            log::warn!("tick limit {} reached, stopping early", cli.max_ticks);
            break;
        }
        world.tick();
        ticks += 1;
    }

    let elapsed = start.elapsed();
    log::info!(
        "finished {} generations ({} ticks) in {:.2}s, best age {} ticks",
        world.stats.generations,
        ticks,
        elapsed.as_secs_f64(),
        world.best_age()
    );

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&world.stats)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report {}", path.display()))?;
        log::info!("report written to {}", path.display());
    }

    Ok(())
}
