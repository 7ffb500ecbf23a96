//! tsp-pso CLI: solve a TSP distance matrix with Particle Swarm Optimization.

use clap::Parser;
use std::path::PathBuf;
use tsp_pso::pso::{
    DEFAULT_ACCELERATION, DEFAULT_INERTIA_WEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_SWARM_SIZE,
};
use tsp_pso::{DistanceMatrix, PsoConfig, PsoRunner};

#[derive(Parser)]
#[command(name = "tsp-pso")]
#[command(about = "Approximate TSP solver using Particle Swarm Optimization")]
#[command(version)]
struct Cli {
    /// Distance matrix file: one comma-separated row per line
    #[arg(default_value = "problems/48.txt")]
    problem: PathBuf,

    /// Number of particles
    #[arg(short, long, default_value_t = DEFAULT_SWARM_SIZE)]
    swarm_size: usize,

    /// Number of iterations
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    iterations: usize,

    /// Inertia weight (w)
    #[arg(short = 'w', long, default_value_t = DEFAULT_INERTIA_WEIGHT)]
    inertia_weight: f64,

    /// Acceleration coefficient (c) for both the cognitive and social terms
    #[arg(short = 'c', long, default_value_t = DEFAULT_ACCELERATION)]
    acceleration: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let matrix = DistanceMatrix::load(&cli.problem)?;

    let mut config = PsoConfig::default()
        .with_swarm_size(cli.swarm_size)
        .with_max_iterations(cli.iterations)
        .with_inertia_weight(cli.inertia_weight)
        .with_acceleration(cli.acceleration);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let result = PsoRunner::run(&matrix, &config)?;
    println!("{result}");

    Ok(())
}
