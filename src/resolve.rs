//! Move resolution and contamination.
//!
//! Validates a requested placement, decides clone vs relocate by Chebyshev
//! distance, applies it to the board, and runs the one-shot contamination
//! pass over the destination's 3x3 neighborhood. Precondition violations
//! are caller bugs and surface as `MoveError`; the front end is responsible
//! for only offering legal moves.

use crate::board::{Board, CellChange, CellState, OutOfBounds, Pos, Rect, Side};

/// How a move affects its origin, derived from the distance and never
/// stored: distance <= 1 clones, anything farther relocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum MoveKind {
    /// Origin keeps its cell; a new one appears at the destination.
    Clone,
    /// Origin is vacated; its cell reappears at the destination.
    Relocate,
}

impl MoveKind {
    /// Classifies the move from `origin` to `dest`.
    ///
    /// A zero-distance pair classifies as `Clone`, but `apply_move` rejects
    /// it before classification matters.
    pub fn classify(origin: Pos, dest: Pos) -> MoveKind {
        if origin.chebyshev_distance(dest) <= 1 {
            MoveKind::Clone
        } else {
            MoveKind::Relocate
        }
    }
}

/// A move request that violates the caller contract.
///
/// Each variant names the precondition that failed. None of these are
/// reachable through a front end that offers only `playable_origins` and
/// `reachable_free_cells` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),

    #[error("origin {origin} does not hold a cell of the moving side")]
    OriginNotHeld { origin: Pos },

    #[error("destination {dest} is not free")]
    DestinationOccupied { dest: Pos },

    #[error("origin and destination are both {pos}")]
    ZeroDistance { pos: Pos },
}

/// Executes a validated move for `mover` and returns the effect records in
/// notification order: vacate (relocate only), destination placement, then
/// contamination flips in area-scan order.
///
/// Preconditions, all checked before the first write (a failed call leaves
/// the board untouched):
/// 1. `origin` holds a `mover` cell.
/// 2. The move distance is nonzero. Checked before the occupancy test so
///    that an origin-equals-destination request reports the distance
///    violation rather than the occupancy one it implies.
/// 3. `dest` is free.
///
/// The `max_move_distance` range limit is the caller's responsibility; the
/// resolver applies whatever legal-by-ownership request it is given.
///
/// Contamination is single-depth: every neighbor of `dest` held by the
/// opposing side flips to `mover`, and the pass is not reapplied around
/// flipped cells within the same call.
pub fn apply_move(
    board: &mut Board,
    origin: Pos,
    dest: Pos,
    mover: Side,
) -> Result<Vec<CellChange>, MoveError> {
    if board.get(origin)? != CellState::Held(mover) {
        return Err(MoveError::OriginNotHeld { origin });
    }
    if origin.chebyshev_distance(dest) == 0 {
        return Err(MoveError::ZeroDistance { pos: origin });
    }
    if board.get(dest)? != CellState::Free {
        return Err(MoveError::DestinationOccupied { dest });
    }

    let mut changes = Vec::new();

    if MoveKind::classify(origin, dest) == MoveKind::Relocate {
        changes.push(board.set(origin, origin, CellState::Free)?);
    }
    changes.push(board.set(origin, dest, CellState::Held(mover))?);

    // One-shot contamination over the clipped 3x3 window, destination
    // excluded. Collect first: the scan borrows the board immutably.
    let mut flips = Vec::new();
    board.for_each_in_area(Rect::centered(dest, 1), |pos, state| {
        if pos == dest {
            return;
        }
        if let CellState::Held(holder) = state {
            if holder != mover {
                flips.push(pos);
            }
        }
    });
    for pos in flips {
        changes.push(board.set(dest, pos, CellState::Held(mover))?);
    }

    Ok(changes)
}
