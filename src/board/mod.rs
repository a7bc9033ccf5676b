//! Board representation and core game-state types.
//!
//! Contains the grid store, cell ownership types, and the geometry
//! primitives used for windowed scans.

pub mod cell;
pub mod geometry;
pub mod grid;

pub use cell::{CellState, Side};
pub use geometry::{Pos, Rect};
pub use grid::{
    Board, BoardConfig, BoardEvent, CellChange, OutOfBounds, DEFAULT_COLUMNS,
    DEFAULT_MAX_MOVE_DISTANCE, DEFAULT_ROWS,
};
