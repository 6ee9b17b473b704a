//! Strategy phases

use std::fmt;

/// Phase of the deduction strategy
///
/// Phases only move forward:
/// ```text
/// ColorDiscovery → InitialArrangement → Refinement
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Monochrome guesses to learn how many of each colour the secret holds
    #[default]
    ColorDiscovery,
    /// One guess made of exactly the discovered colours
    InitialArrangement,
    /// Guess from the candidate set and intersect after every turn
    Refinement,
}

impl Phase {
    /// The phase that follows this one
    ///
    /// `Refinement` is terminal and maps to itself.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ColorDiscovery => Self::InitialArrangement,
            Self::InitialArrangement | Self::Refinement => Self::Refinement,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ColorDiscovery => "colour discovery",
            Self::InitialArrangement => "initial arrangement",
            Self::Refinement => "refinement",
        };
        write!(f, "{name}")
    }
}
