//! Ruleset interpretation: maps cell colours to turn actions.
//!
//! A ruleset is written in the classic naming scheme: one letter per colour
//! in the cycle, `R` for a clockwise turn and `L` for a counter-clockwise
//! turn. Langton's turmite is `"RL"`.

use crate::error::SimulationError;
use serde::{Deserialize, Serialize};

/// A single turn instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    TurnLeft,
    TurnRight,
}

/// Ordered turn instructions, one per colour in the cycle.
///
/// The ruleset length is the number of distinct colours and the modulus for
/// colour advancement. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ruleset {
    actions: Vec<TurnAction>,
}

impl Ruleset {
    /// Parse a ruleset from its `"RL"` notation.
    ///
    /// Fails with `EmptyRuleset` for an empty string and `InvalidRuleSymbol`
    /// for any character other than `R` or `L`.
    pub fn parse(notation: &str) -> Result<Self, SimulationError> {
        if notation.is_empty() {
            return Err(SimulationError::EmptyRuleset);
        }

        let mut actions = Vec::with_capacity(notation.len());
        for symbol in notation.chars() {
            match symbol {
                'R' => actions.push(TurnAction::TurnRight),
                'L' => actions.push(TurnAction::TurnLeft),
                other => return Err(SimulationError::InvalidRuleSymbol(other)),
            }
        }

        Ok(Self { actions })
    }

    /// Number of colours in the cycle
    #[inline]
    pub fn colour_count(&self) -> u32 {
        self.actions.len() as u32
    }

    /// Turn action for a colour index
    pub fn action_for(&self, colour: u32) -> Result<TurnAction, SimulationError> {
        self.actions
            .get(colour as usize)
            .copied()
            .ok_or(SimulationError::InvalidColour {
                colour,
                n_colours: self.colour_count(),
            })
    }
}
