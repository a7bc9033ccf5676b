//! The heuristic opponent.
//!
//! State-free, one move per call, no lookahead. The procedure branches out
//! from the most exposed own cell, then weighs an attacking placement
//! against a consolidating one inside that cell's move window:
//!
//! 1. Origin: the playable own cell with the fewest same-side neighbors.
//!    Cells deep inside a friendly cluster contribute little, so the most
//!    exposed one is grown first.
//! 2. Attack candidate: the reachable free cell with the most opponent
//!    neighbors.
//! 3. If that attack would flip every remaining opponent cell, take it
//!    immediately.
//! 4. Otherwise prefer the reachable free cell with the most same-side
//!    neighbors, but only when it strictly beats the attack score; equal
//!    scores attack.
//!
//! Every selection resolves ties by first-found in row-major scan order.
//! That is observable game behavior inherited from the reference
//! implementation and is kept as is; no secondary key breaks ties.

use crate::board::{Board, CellChange, CellState, Pos, Side};
use crate::movegen::{adjacent_count, playable_origins, reachable_free_cells};
use crate::resolve::{apply_move, MoveError};

/// Whether a scored scan keeps the highest or the lowest count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Most,
    Least,
}

/// Scans `cells` in order and returns the position with the most (or
/// fewest) `adjacent_to` neighbors, together with that count. The first
/// candidate found wins ties. `None` iff `cells` is empty.
fn select_by_adjacency(
    board: &Board,
    cells: &[Pos],
    adjacent_to: Side,
    selection: Selection,
) -> Option<(Pos, usize)> {
    let mut best: Option<(Pos, usize)> = None;
    for &pos in cells {
        let count = adjacent_count(board, pos, adjacent_to);
        let better = match best {
            None => true,
            Some((_, best_count)) => match selection {
                Selection::Most => count > best_count,
                Selection::Least => count < best_count,
            },
        };
        if better {
            best = Some((pos, count));
        }
    }
    best
}

/// Selects the next move for `side`, or `None` when the side has no
/// playable origin. Pure: the board is not touched.
///
/// Deterministic by construction; calling it twice against an identical
/// grid yields an identical pair.
pub fn choose_move(board: &Board, side: Side) -> Option<(Pos, Pos)> {
    let origins = playable_origins(board, side);
    let (origin, _) = select_by_adjacency(board, &origins, side, Selection::Least)?;

    // Every playable origin has at least one reachable free cell, so both
    // candidate scans below are non-empty.
    let reachable = reachable_free_cells(board, origin);
    let opponent = side.opponent();
    let (attack_pos, attack_score) =
        select_by_adjacency(board, &reachable, opponent, Selection::Most)?;

    // A destination adjacent to every remaining opponent cell ends the
    // game; nothing can outweigh that.
    if attack_score == board.count_with_state(CellState::Held(opponent)) {
        return Some((origin, attack_pos));
    }

    let (consolidation_pos, consolidation_score) =
        select_by_adjacency(board, &reachable, side, Selection::Most)?;

    if consolidation_score > attack_score {
        Some((origin, consolidation_pos))
    } else {
        Some((origin, attack_pos))
    }
}

/// Chooses and applies a move for `side`.
///
/// Returns the effect records of the applied move, or `Ok(None)` when the
/// side cannot move; that is an expected terminal condition, not a fault,
/// and the board is left untouched.
pub fn play(board: &mut Board, side: Side) -> Result<Option<Vec<CellChange>>, MoveError> {
    match choose_move(board, side) {
        Some((origin, dest)) => apply_move(board, origin, dest, side).map(Some),
        None => Ok(None),
    }
}
