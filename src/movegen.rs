//! Playable-cell and reachability queries.
//!
//! Answers "which cells can this side move from" and "which free cells can
//! this origin reach". Both queries recompute from scratch on every call;
//! the grids are small enough that caching would only add invalidation
//! hazards. Scan order is row-major ascending throughout, so "first
//! matching" ties resolve identically every run.

use crate::board::{Board, CellState, Pos, Rect, Side};

/// Counts the cells held by `side` in the 3x3 window around `center`,
/// excluding `center` itself. The window is clipped to the grid bounds.
///
/// This is the same windowed count the contamination rule walks, used
/// read-only by the strategy for scoring.
pub fn adjacent_count(board: &Board, center: Pos, side: Side) -> usize {
    let mut count = 0;
    board.for_each_in_area(Rect::centered(center, 1), |pos, state| {
        if pos != center && state == CellState::Held(side) {
            count += 1;
        }
    });
    count
}

/// All free cells within the move window around `origin`, in scan order.
///
/// The window has half-width `max_move_distance` and is clipped to the
/// grid bounds.
pub fn reachable_free_cells(board: &Board, origin: Pos) -> Vec<Pos> {
    let window = Rect::centered(origin, board.config().max_move_distance);
    let mut free = Vec::new();
    board.for_each_in_area(window, |pos, state| {
        if state.is_free() {
            free.push(pos);
        }
    });
    free
}

/// All cells held by `side` that have at least one reachable free cell,
/// in scan order.
///
/// A side with no playable origin cannot move; the controller treats the
/// empty result as a terminal condition, not an error.
pub fn playable_origins(board: &Board, side: Side) -> Vec<Pos> {
    let mut owned = Vec::new();
    board.for_each_in_area(board.bounds(), |pos, state| {
        if state == CellState::Held(side) {
            owned.push(pos);
        }
    });

    owned
        .into_iter()
        .filter(|&pos| !reachable_free_cells(board, pos).is_empty())
        .collect()
}
