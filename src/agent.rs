//! Turmite agent: position and heading state machine.

use crate::ruleset::TurnAction;
use serde::{Deserialize, Serialize};

/// Cardinal heading of the agent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// Next heading clockwise (a right turn)
    #[inline]
    pub fn clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Next heading counter-clockwise (a left turn)
    #[inline]
    pub fn counter_clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    /// Row/column delta of a one-cell move in this heading.
    ///
    /// Up increments the row, Down decrements it; Right increments the
    /// column, Left decrements it.
    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::Up => (1, 0),
            Heading::Down => (-1, 0),
            Heading::Right => (0, 1),
            Heading::Left => (0, -1),
        }
    }
}

/// The agent walking the grid.
///
/// Position is signed: between a move and the growth that follows it, the
/// agent may sit one cell outside the allocated grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    i: i64,
    j: i64,
    heading: Heading,
}

impl Agent {
    /// Create an agent at the given grid-array position
    pub fn new(i: i64, j: i64, heading: Heading) -> Self {
        Self { i, j, heading }
    }

    /// Current position in grid-array coordinates
    #[inline]
    pub fn position(&self) -> (i64, i64) {
        (self.i, self.j)
    }

    /// Current heading
    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Rotate the heading; no other state changes
    pub fn turn(&mut self, action: TurnAction) {
        self.heading = match action {
            TurnAction::TurnRight => self.heading.clockwise(),
            TurnAction::TurnLeft => self.heading.counter_clockwise(),
        };
    }

    /// Move one cell in the current heading
    pub fn advance(&mut self) {
        let (di, dj) = self.heading.delta();
        self.i += di;
        self.j += dj;
    }

    /// Shift the position by a grid-growth offset
    pub fn translate(&mut self, offset: (i64, i64)) {
        self.i += offset.0;
        self.j += offset.1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_cycle() {
        let mut heading = Heading::Up;
        let cycle = [Heading::Right, Heading::Down, Heading::Left, Heading::Up];
        for expected in cycle {
            heading = heading.clockwise();
            assert_eq!(heading, expected);
        }
    }

    #[test]
    fn test_counter_clockwise_cycle() {
        let mut heading = Heading::Up;
        let cycle = [Heading::Left, Heading::Down, Heading::Right, Heading::Up];
        for expected in cycle {
            heading = heading.counter_clockwise();
            assert_eq!(heading, expected);
        }
    }

    #[test]
    fn test_turns_are_inverse() {
        for heading in [Heading::Up, Heading::Right, Heading::Down, Heading::Left] {
            assert_eq!(heading.clockwise().counter_clockwise(), heading);
            assert_eq!(heading.counter_clockwise().clockwise(), heading);
        }
    }

    #[test]
    fn test_advance_deltas() {
        let mut agent = Agent::new(10, 10, Heading::Up);
        agent.advance();
        assert_eq!(agent.position(), (11, 10));

        agent = Agent::new(10, 10, Heading::Down);
        agent.advance();
        assert_eq!(agent.position(), (9, 10));

        agent = Agent::new(10, 10, Heading::Right);
        agent.advance();
        assert_eq!(agent.position(), (10, 11));

        agent = Agent::new(10, 10, Heading::Left);
        agent.advance();
        assert_eq!(agent.position(), (10, 9));
    }

    #[test]
    fn test_turn_then_advance() {
        let mut agent = Agent::new(0, 0, Heading::Up);
        agent.turn(TurnAction::TurnRight);
        assert_eq!(agent.heading(), Heading::Right);
        agent.advance();
        assert_eq!(agent.position(), (0, 1));
    }

    #[test]
    fn test_translate() {
        let mut agent = Agent::new(-1, 2, Heading::Left);
        agent.translate((10, 10));
        assert_eq!(agent.position(), (9, 12));
        assert_eq!(agent.heading(), Heading::Left);
    }
}
