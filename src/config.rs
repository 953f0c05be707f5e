//! Configuration system for the turmite simulator.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::agent::Heading;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub turmite: TurmiteConfig,
    pub grid: GridConfig,
    pub logging: LoggingConfig,
}

/// Agent and ruleset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurmiteConfig {
    /// Ruleset in "RL" notation, one symbol per colour
    pub ruleset: String,
    /// Start position; an offset from the canvas centre when `centre_start`
    /// is set, an absolute grid coordinate otherwise
    pub start: (i64, i64),
    /// Initial heading
    pub heading: Heading,
}

/// Grid sizing and growth configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of the initial square canvas
    pub canvas_size: usize,
    /// Interpret `start` relative to the canvas centre
    pub centre_start: bool,
    /// Cells added on every side when the walk leaves the canvas
    pub padding: usize,
}

/// Logging and statistics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Steps between stats history entries (0 disables history)
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            turmite: TurmiteConfig::default(),
            grid: GridConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TurmiteConfig {
    fn default() -> Self {
        Self {
            ruleset: "RL".to_string(),
            start: (0, 0),
            heading: Heading::Up,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            canvas_size: 65,
            centre_start: true,
            padding: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Resolve the start position in grid-array coordinates
    pub fn start_position(&self) -> (i64, i64) {
        let (i, j) = self.turmite.start;
        if self.grid.centre_start {
            let centre = (self.grid.canvas_size / 2) as i64;
            (i + centre, j + centre)
        } else {
            (i, j)
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.turmite.ruleset.is_empty() {
            return Err("ruleset must contain at least one symbol".to_string());
        }
        if self.turmite.ruleset.chars().any(|c| c != 'R' && c != 'L') {
            return Err("ruleset may only contain 'R' and 'L' symbols".to_string());
        }
        if self.grid.canvas_size == 0 {
            return Err("canvas_size must be > 0".to_string());
        }
        if self.grid.padding == 0 {
            return Err("padding must be > 0".to_string());
        }
        let (i, j) = self.start_position();
        let canvas = self.grid.canvas_size as i64;
        if i < 0 || j < 0 || i >= canvas || j >= canvas {
            return Err(format!(
                "start position ({}, {}) outside the {}x{} canvas",
                i, j, canvas, canvas
            ));
        }
        Ok(())
    }
}
