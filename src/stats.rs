//! Statistics tracking for the simulation.

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Statistics snapshot for a simulation step
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Current simulation time
    pub time: u64,
    /// Grid height
    pub height: usize,
    /// Grid width
    pub width: usize,
    /// Cell count per colour index
    pub colour_counts: Vec<u64>,
    /// Grid growth events so far
    pub growth_events: u64,
    /// Cumulative mean of the colours the agent has read
    pub mean_visited_colour: f64,
}

impl Stats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats from current simulation state
    pub fn update(&mut self, time: u64, grid: &Grid, growth_events: u64, mean_visited_colour: f64) {
        self.time = time;
        let (height, width) = grid.dimensions();
        self.height = height;
        self.width = width;
        self.colour_counts = grid.colour_counts();
        self.growth_events = growth_events;
        self.mean_visited_colour = mean_visited_colour;
    }

    /// Number of cells no longer at the background colour
    pub fn active_cells(&self) -> u64 {
        self.colour_counts.iter().skip(1).sum()
    }

    /// One-line summary for progress output
    pub fn summary(&self) -> String {
        format!(
            "step {:>10} | grid {}x{} | active cells {} | growths {} | mean colour {:.3}",
            self.time,
            self.height,
            self.width,
            self.active_cells(),
            self.growth_events,
            self.mean_visited_colour
        )
    }
}

/// Record of stats snapshots over a run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    pub entries: Vec<Stats>,
}

impl StatsHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot
    pub fn record(&mut self, stats: Stats) {
        self.entries.push(stats);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Save history to a JSON file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_from_grid() {
        let mut grid = Grid::new(3, 3, 2);
        grid.advance_colour(0, 0).unwrap();
        grid.advance_colour(2, 1).unwrap();

        let mut stats = Stats::new();
        stats.update(42, &grid, 1, 0.5);

        assert_eq!(stats.time, 42);
        assert_eq!((stats.height, stats.width), (3, 3));
        assert_eq!(stats.colour_counts, vec![7, 2]);
        assert_eq!(stats.active_cells(), 2);
    }

    #[test]
    fn test_summary_mentions_key_fields() {
        let grid = Grid::new(4, 4, 2);
        let mut stats = Stats::new();
        stats.update(100, &grid, 3, 0.25);

        let summary = stats.summary();
        assert!(summary.contains("100"));
        assert!(summary.contains("4x4"));
        assert!(summary.contains("growths 3"));
    }

    #[test]
    fn test_history_record() {
        let mut history = StatsHistory::new();
        assert!(history.is_empty());
        history.record(Stats::new());
        history.record(Stats::new());
        assert_eq!(history.len(), 2);
    }
}
