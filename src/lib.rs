//! # TURMITE
//!
//! Simulator for turmites - generalized Langton's ants - on a dynamically
//! growing two-dimensional grid.
//!
//! ## Features
//!
//! - **Unbounded walks**: the grid grows on demand when the agent steps off
//!   the allocated canvas, so memory stays proportional to the visited area
//! - **Arbitrary rulesets**: any colour cycle in the classic `"RL"` notation
//! - **Deterministic**: identical configurations replay identical runs
//! - **Configurable**: YAML configuration files, no process-wide constants
//!
//! ## Quick Start
//!
//! ```rust
//! use turmite::{Config, Simulation};
//!
//! // Langton's turmite ("RL") on the default canvas
//! let config = Config::default();
//! let mut sim = Simulation::new(&config).expect("default config is valid");
//!
//! // Run simulation
//! sim.run(10_000);
//!
//! // Check results
//! let (height, width) = sim.dimensions();
//! println!("Grid: {}x{}", height, width);
//! println!("Agent at: {:?}", sim.agent_position());
//! ```
//!
//! ## Custom rulesets
//!
//! ```rust
//! use turmite::Config;
//!
//! let mut config = Config::default();
//! config.turmite.ruleset = "RLLR".to_string();
//! config.grid.canvas_size = 129;
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod grid;
pub mod ruleset;
pub mod simulation;
pub mod stats;

// Re-export main types
pub use agent::Heading;
pub use config::Config;
pub use error::SimulationError;
pub use ruleset::{Ruleset, TurnAction};
pub use simulation::Simulation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark
pub fn benchmark(steps: u64, ruleset: &str) -> Result<BenchmarkResult, SimulationError> {
    use std::time::Instant;

    let mut config = Config::default();
    config.turmite.ruleset = ruleset.to_string();

    let mut sim = Simulation::new(&config)?;

    let start = Instant::now();
    sim.run(steps);
    let elapsed = start.elapsed();

    let (height, width) = sim.dimensions();
    Ok(BenchmarkResult {
        steps,
        ruleset: ruleset.to_string(),
        elapsed_secs: elapsed.as_secs_f64(),
        steps_per_second: steps as f64 / elapsed.as_secs_f64(),
        final_height: height,
        final_width: width,
        growth_events: sim.growth_events(),
    })
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub steps: u64,
    pub ruleset: String,
    pub elapsed_secs: f64,
    pub steps_per_second: f64,
    pub final_height: usize,
    pub final_width: usize,
    pub growth_events: u64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Ruleset: {}", self.ruleset)?;
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} steps/s", self.steps_per_second)?;
        writeln!(f, "Final grid: {}x{}", self.final_height, self.final_width)?;
        writeln!(f, "Growth events: {}", self.growth_events)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_quick_simulation() {
        let config = Config::default();
        let mut sim = Simulation::new(&config).unwrap();

        sim.run(100);

        assert_eq!(sim.time(), 100);
    }

    #[test]
    fn test_benchmark() {
        let result = benchmark(100, "RL").unwrap();

        assert_eq!(result.steps, 100);
        assert!(result.steps_per_second > 0.0);
    }

    #[test]
    fn test_benchmark_rejects_bad_ruleset() {
        assert!(benchmark(10, "RQ").is_err());
    }
}
