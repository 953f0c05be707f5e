//! Error types for construction and defensive engine contracts.

/// Errors reported by the simulation engine.
///
/// The construction variants (`EmptyRuleset`, `InvalidRuleSymbol`,
/// `InvalidPadding`) abort building a [`Simulation`](crate::Simulation).
/// The remaining variants guard contracts that are unreachable while the
/// engine's invariants hold, but they are checked rather than assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Ruleset has zero entries
    EmptyRuleset,
    /// Ruleset contains a symbol other than 'R' or 'L'
    InvalidRuleSymbol(char),
    /// Growth padding of zero cannot keep the agent inside the grid
    InvalidPadding,
    /// Colour index outside the configured colour cycle
    InvalidColour { colour: u32, n_colours: u32 },
    /// Coordinates outside the current grid bounds
    OutOfBounds {
        i: i64,
        j: i64,
        height: usize,
        width: usize,
    },
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRuleset => write!(f, "ruleset must contain at least one symbol"),
            Self::InvalidRuleSymbol(symbol) => {
                write!(f, "invalid rule symbol '{}': expected 'R' or 'L'", symbol)
            }
            Self::InvalidPadding => write!(f, "growth padding must be > 0"),
            Self::InvalidColour { colour, n_colours } => {
                write!(f, "colour {} outside cycle of {} colours", colour, n_colours)
            }
            Self::OutOfBounds {
                i,
                j,
                height,
                width,
            } => {
                write!(f, "position ({}, {}) outside {}x{} grid", i, j, height, width)
            }
        }
    }
}

impl std::error::Error for SimulationError {}
