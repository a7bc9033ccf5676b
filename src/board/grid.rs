//! The cell grid.
//!
//! `Board` is a pure indexed store with change records: it never interprets
//! cell states semantically (no ownership or contamination policy lives
//! here), which keeps the move resolver and the strategy testable against a
//! bare board. Mutations return `CellChange` effect records instead of
//! broadcasting to hidden subscribers; the caller dispatches them.

use serde::{Deserialize, Serialize};

use super::cell::CellState;
use super::geometry::{Pos, Rect};

/// Default grid width.
pub const DEFAULT_COLUMNS: i32 = 7;
/// Default grid height.
pub const DEFAULT_ROWS: i32 = 7;
/// Default maximum Chebyshev distance of a move.
pub const DEFAULT_MAX_MOVE_DISTANCE: i32 = 2;

/// Grid dimensions and move range.
///
/// Construction-time values rather than compile-time globals, so the core
/// stays testable at other grid sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub columns: i32,
    pub rows: i32,
    pub max_move_distance: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            max_move_distance: DEFAULT_MAX_MOVE_DISTANCE,
        }
    }
}

/// A position outside the grid bounds was addressed directly.
///
/// Callers are expected to pre-filter coordinates; the board reports the
/// violation rather than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position {pos} is outside the {columns}x{rows} grid")]
pub struct OutOfBounds {
    pub pos: Pos,
    pub columns: i32,
    pub rows: i32,
}

/// Effect record for a single cell write.
///
/// `cause` is the position that logically produced the change, used by a
/// view for animation sourcing only; it equals `pos` when there is no
/// meaningful origin (e.g. vacating a cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub cause: Pos,
    pub pos: Pos,
    pub state: CellState,
}

/// Notification emitted by board-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// The whole grid was recreated.
    Reset,
    /// A single cell was written.
    Cell(CellChange),
}

/// A fixed-size grid of cell states, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates a fully free board.
    ///
    /// Panics if the configured dimensions are not positive; a zero-sized
    /// grid is a programmer error, not a game state.
    pub fn new(config: BoardConfig) -> Self {
        assert!(
            config.columns > 0 && config.rows > 0,
            "grid dimensions must be positive, got {}x{}",
            config.columns,
            config.rows
        );
        let len = (config.columns * config.rows) as usize;
        Board {
            config,
            cells: vec![CellState::Free; len],
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// The rectangle covering the whole grid.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            Pos::new(0, 0),
            Pos::new(self.config.columns - 1, self.config.rows - 1),
        )
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.col >= 0 && pos.col < self.config.columns && pos.row >= 0 && pos.row < self.config.rows
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.row * self.config.columns + pos.col) as usize)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, pos: Pos) -> OutOfBounds {
        OutOfBounds {
            pos,
            columns: self.config.columns,
            rows: self.config.rows,
        }
    }

    /// Reads a cell. Out-of-range positions are an error, never clamped.
    pub fn get(&self, pos: Pos) -> Result<CellState, OutOfBounds> {
        match self.index(pos) {
            Some(i) => Ok(self.cells[i]),
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// Overwrites a cell and returns the effect record for the write.
    pub fn set(&mut self, cause: Pos, pos: Pos, state: CellState) -> Result<CellChange, OutOfBounds> {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = state;
                Ok(CellChange { cause, pos, state })
            }
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// Resets every cell to free.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Free);
    }

    /// Invokes `visitor` for every position inside `area` intersected with
    /// the grid bounds, in row-major ascending order.
    ///
    /// Positions outside the grid are silently skipped, so callers may pass
    /// windows that extend past the edges.
    pub fn for_each_in_area<F>(&self, area: Rect, mut visitor: F)
    where
        F: FnMut(Pos, CellState),
    {
        for pos in area.positions() {
            if let Some(i) = self.index(pos) {
                visitor(pos, self.cells[i]);
            }
        }
    }

    /// Counts the cells currently holding `state`. Full-grid scan.
    pub fn count_with_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Returns true iff at least one cell holds `state`. Full-grid scan.
    pub fn has_any(&self, state: CellState) -> bool {
        self.cells.iter().any(|&c| c == state)
    }
}
