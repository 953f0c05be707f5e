//! Simulation engine - the turmite step loop.

use crate::agent::{Agent, Heading};
use crate::config::Config;
use crate::error::SimulationError;
use crate::grid::Grid;
use crate::ruleset::Ruleset;
use crate::stats::{Stats, StatsHistory};
use ndarray::ArrayView2;

/// The simulation engine.
///
/// Owns the agent, the grid and the ruleset, and keeps agent coordinates and
/// grid bounds mutually consistent through growth events. An instance must
/// be exclusively owned by one thread for the duration of a run; readers may
/// inspect state between steps.
pub struct Simulation {
    // Core state
    agent: Agent,
    grid: Grid,
    ruleset: Ruleset,

    // Growth policy
    padding: usize,
    growth_events: u64,

    // Progress
    time: u64,
    visited_colour_sum: u64,

    // Statistics
    pub stats: Stats,
    pub stats_history: StatsHistory,
    stats_interval: u64,
}

impl Simulation {
    /// Build a simulation from a configuration.
    ///
    /// Fails with `EmptyRuleset` or `InvalidRuleSymbol` on a bad ruleset,
    /// with `InvalidPadding` when the growth padding is zero, and with
    /// `OutOfBounds` when the configured start position falls outside the
    /// initial canvas.
    pub fn new(config: &Config) -> Result<Self, SimulationError> {
        let ruleset = Ruleset::parse(&config.turmite.ruleset)?;

        // A zero padding would make grow() a no-op and strand the agent
        // outside the grid on the first boundary step.
        if config.grid.padding == 0 {
            return Err(SimulationError::InvalidPadding);
        }

        let canvas = config.grid.canvas_size;
        let grid = Grid::new(canvas, canvas, ruleset.colour_count());

        let (start_i, start_j) = config.start_position();
        if !grid.contains(start_i, start_j) {
            return Err(SimulationError::OutOfBounds {
                i: start_i,
                j: start_j,
                height: canvas,
                width: canvas,
            });
        }

        Ok(Self {
            agent: Agent::new(start_i, start_j, config.turmite.heading),
            grid,
            ruleset,
            padding: config.grid.padding,
            growth_events: 0,
            time: 0,
            visited_colour_sum: 0,
            stats: Stats::new(),
            stats_history: StatsHistory::new(),
            stats_interval: config.logging.stats_interval,
        })
    }

    /// Perform one simulation step.
    ///
    /// Read the colour under the agent, turn, advance the departed cell's
    /// colour, move one cell forward, then grow the grid if the move left
    /// the allocated bounds. The ordering is load-bearing: the departed
    /// cell's colour advances after the turn is computed and before the
    /// move, and the bounds check happens after the move.
    pub fn step(&mut self) {
        let (i, j) = self.agent.position();

        // The agent position is in bounds between steps and stored colours
        // stay below the cycle length, so these cannot fail here.
        let colour = self
            .grid
            .colour_at(i, j)
            .expect("agent position within grid bounds");
        let action = self
            .ruleset
            .action_for(colour)
            .expect("stored colour within colour cycle");

        self.agent.turn(action);
        self.grid
            .advance_colour(i, j)
            .expect("agent position within grid bounds");
        self.agent.advance();

        let (next_i, next_j) = self.agent.position();
        if !self.grid.contains(next_i, next_j) {
            let offset = self.grid.grow(self.padding);
            self.agent.translate(offset);
            self.growth_events += 1;
            log::debug!(
                "grid grown to {}x{} at step {}",
                self.grid.height(),
                self.grid.width(),
                self.time + 1
            );
        }

        self.visited_colour_sum += colour as u64;
        self.time += 1;

        if self.stats_interval > 0 && self.time % self.stats_interval == 0 {
            self.update_stats();
        }
    }

    /// Run the simulation for the given number of steps
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Run the simulation with a callback after every step
    pub fn run_with_callback<F>(&mut self, steps: u64, mut callback: F)
    where
        F: FnMut(&Simulation, u64),
    {
        for i in 0..steps {
            self.step();
            callback(self, i);
        }
    }

    /// Read-only snapshot of the current grid
    #[inline]
    pub fn snapshot(&self) -> ArrayView2<'_, u32> {
        self.grid.view()
    }

    /// Current grid `(height, width)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Agent position in grid-array coordinates
    #[inline]
    pub fn agent_position(&self) -> (i64, i64) {
        self.agent.position()
    }

    /// Agent heading
    #[inline]
    pub fn agent_heading(&self) -> Heading {
        self.agent.heading()
    }

    /// Number of colours in the cycle
    #[inline]
    pub fn colour_count(&self) -> u32 {
        self.ruleset.colour_count()
    }

    /// Steps taken so far
    #[inline]
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Number of grid growth events so far
    #[inline]
    pub fn growth_events(&self) -> u64 {
        self.growth_events
    }

    /// Cumulative mean of the colours the agent has read
    pub fn mean_visited_colour(&self) -> f64 {
        if self.time == 0 {
            0.0
        } else {
            self.visited_colour_sum as f64 / self.time as f64
        }
    }

    /// Fresh statistics snapshot for the current state
    pub fn current_stats(&self) -> Stats {
        let mut stats = Stats::new();
        stats.update(
            self.time,
            &self.grid,
            self.growth_events,
            self.mean_visited_colour(),
        );
        stats
    }

    fn update_stats(&mut self) {
        self.stats.update(
            self.time,
            &self.grid,
            self.growth_events,
            self.mean_visited_colour(),
        );
        self.stats_history.record(self.stats.clone());
    }
}
