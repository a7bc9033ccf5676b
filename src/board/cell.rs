//! Cell ownership types.
//!
//! Every grid position holds exactly one `CellState` at all times: free,
//! or held by one of the two sides.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Alpha,
    Beta,
}

impl Side {
    /// The opposing side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Alpha => Side::Beta,
            Side::Beta => Side::Alpha,
        }
    }

    /// Lowercase name, used in self-play summaries.
    pub const fn name(self) -> &'static str {
        match self {
            Side::Alpha => "alpha",
            Side::Beta => "beta",
        }
    }
}

/// The occupant of a single grid position.
///
/// Three-valued: free, held by alpha, or held by beta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Free,
    Held(Side),
}

impl CellState {
    /// The side holding this cell, if any.
    pub const fn holder(self) -> Option<Side> {
        match self {
            CellState::Free => None,
            CellState::Held(side) => Some(side),
        }
    }

    pub const fn is_free(self) -> bool {
        matches!(self, CellState::Free)
    }
}

impl From<Side> for CellState {
    fn from(side: Side) -> Self {
        CellState::Held(side)
    }
}
