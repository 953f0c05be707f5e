//! TURMITE - CLI entry point.
//!
//! Runs turmite simulations and reports statistics; rendering is left to
//! downstream consumers of the grid snapshots.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use turmite::{benchmark, Config, Simulation};

#[derive(Parser)]
#[command(name = "turmite")]
#[command(version)]
#[command(about = "Turmite (generalized Langton's ant) simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of steps to simulate
        #[arg(short, long, default_value = "100000")]
        steps: u64,

        /// Output directory for statistics
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Write a default configuration file
    Init {
        /// Where to write the configuration
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Measure stepping performance
    Benchmark {
        /// Number of steps to time
        #[arg(short, long, default_value = "1000000")]
        steps: u64,

        /// Ruleset to benchmark
        #[arg(short, long, default_value = "RL")]
        ruleset: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            steps,
            output,
            quiet,
        } => run_simulation(config, steps, output, quiet),

        Commands::Init { output } => generate_config(output),

        Commands::Benchmark { steps, ruleset } => run_benchmark(steps, &ruleset),
    }
}

fn run_simulation(
    config_path: PathBuf,
    steps: u64,
    output: PathBuf,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        println!("Using default configuration");
        Config::default()
    };

    // Create output directory
    std::fs::create_dir_all(&output)?;

    let mut sim = Simulation::new(&config)?;

    println!("Starting simulation");
    println!("  Ruleset: {} ({} colours)", config.turmite.ruleset, sim.colour_count());
    println!(
        "  Canvas: {}x{} (padding {})",
        config.grid.canvas_size, config.grid.canvas_size, config.grid.padding
    );
    println!("  Steps: {}", steps);
    println!();

    let start = Instant::now();
    let stats_interval = config.logging.stats_interval.max(1);

    for i in 0..steps {
        sim.step();

        // Stats output
        if !quiet && i % stats_interval == 0 {
            println!("{}", sim.current_stats().summary());
        }
    }

    let elapsed = start.elapsed();
    let steps_per_sec = sim.time() as f64 / elapsed.as_secs_f64();

    let (height, width) = sim.dimensions();
    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Steps: {}", sim.time());
    println!("Speed: {:.1} steps/s", steps_per_sec);
    println!("Final grid: {}x{}", height, width);
    println!("Growth events: {}", sim.growth_events());
    println!(
        "Agent: {:?} heading {:?}",
        sim.agent_position(),
        sim.agent_heading()
    );
    println!("Mean visited colour: {:.3}", sim.mean_visited_colour());

    // Save stats history
    let stats_path = output.join("stats_history.json");
    sim.stats_history
        .save(stats_path.to_str().ok_or("invalid output path")?)?;
    println!("Stats history: {:?}", stats_path);

    Ok(())
}

fn run_benchmark(steps: u64, ruleset: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== TURMITE Benchmark ===");
    println!("Ruleset: {}", ruleset);
    println!("Steps: {}", steps);
    println!();

    let result = benchmark(steps, ruleset)?;
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
