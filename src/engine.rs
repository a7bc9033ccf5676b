//! Engine facade.
//!
//! Owns the board and exposes the call surface an external turn controller
//! drives: board setup, move execution for either side, the heuristic turn
//! for the automated side, and the terminal-condition predicates. The
//! controller's state machine itself (wait for input, run a turn, end)
//! lives outside the engine.

use crate::board::{
    Board, BoardConfig, BoardEvent, CellChange, CellState, Pos, Side,
};
use crate::movegen;
use crate::resolve::{apply_move, MoveError};
use crate::strategy;

/// The game engine: a board plus the operations on it.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
}

impl Engine {
    /// Creates an engine over a fully free board. Call [`Engine::init_board`]
    /// to seed the starting position.
    pub fn new(config: BoardConfig) -> Self {
        Engine {
            board: Board::new(config),
        }
    }

    /// Read access to the board for queries and rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> BoardConfig {
        self.board.config()
    }

    /// (Re)creates the starting position: every cell free, then two cells
    /// per side in opposite corners.
    ///
    /// Corner convention: beta takes `(0, 0)` and `(columns-1, rows-1)`,
    /// alpha takes `(0, rows-1)` and `(columns-1, 0)`. The returned events
    /// begin with [`BoardEvent::Reset`] followed by the four seed writes in
    /// that order; their cause-hint is the grid center, which a view uses
    /// to animate the opening placement.
    pub fn init_board(&mut self) -> Vec<BoardEvent> {
        let config = self.board.config();
        self.board.clear();

        let center = Pos::new((config.columns + 1) / 2, (config.rows + 1) / 2);
        let seeds = [
            (Pos::new(0, 0), Side::Beta),
            (Pos::new(config.columns - 1, config.rows - 1), Side::Beta),
            (Pos::new(0, config.rows - 1), Side::Alpha),
            (Pos::new(config.columns - 1, 0), Side::Alpha),
        ];

        let mut events = vec![BoardEvent::Reset];
        for (pos, side) in seeds {
            let change = self
                .board
                .set(center, pos, CellState::Held(side))
                .expect("seed corners lie within the grid");
            events.push(BoardEvent::Cell(change));
        }
        events
    }

    /// Executes a move for `mover`; see [`crate::resolve::apply_move`].
    pub fn execute(
        &mut self,
        origin: Pos,
        dest: Pos,
        mover: Side,
    ) -> Result<Vec<CellChange>, MoveError> {
        apply_move(&mut self.board, origin, dest, mover)
    }

    /// Selects the automated side's move without applying it.
    pub fn choose_move(&self, side: Side) -> Option<(Pos, Pos)> {
        strategy::choose_move(&self.board, side)
    }

    /// Runs one automated turn for `side`. `Ok(None)` means the side has
    /// no legal move; the board is left untouched.
    pub fn play_automated(&mut self, side: Side) -> Result<Option<Vec<CellChange>>, MoveError> {
        strategy::play(&mut self.board, side)
    }

    /// Number of cells currently held by `side`. Zero is the elimination
    /// terminal condition.
    pub fn count(&self, side: Side) -> usize {
        self.board.count_with_state(CellState::Held(side))
    }

    /// True iff the board still has at least one free cell.
    pub fn has_free_cell(&self) -> bool {
        self.board.has_any(CellState::Free)
    }

    /// The cells `side` could legally move from; empty means the side
    /// cannot move.
    pub fn playable_origins(&self, side: Side) -> Vec<Pos> {
        movegen::playable_origins(&self.board, side)
    }

    /// The free cells reachable from `origin` within move range.
    pub fn reachable_free_cells(&self, origin: Pos) -> Vec<Pos> {
        movegen::reachable_free_cells(&self.board, origin)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_engine() -> Engine {
        let mut engine = Engine::default();
        engine.init_board();
        engine
    }

    #[test]
    fn init_board_seeds_four_corners() {
        let mut engine = Engine::default();
        let events = engine.init_board();

        assert_eq!(events.len(), 5);
        assert_eq!(events[0], BoardEvent::Reset);

        let board = engine.board();
        assert_eq!(board.get(Pos::new(0, 0)), Ok(CellState::Held(Side::Beta)));
        assert_eq!(board.get(Pos::new(6, 6)), Ok(CellState::Held(Side::Beta)));
        assert_eq!(board.get(Pos::new(0, 6)), Ok(CellState::Held(Side::Alpha)));
        assert_eq!(board.get(Pos::new(6, 0)), Ok(CellState::Held(Side::Alpha)));

        assert_eq!(engine.count(Side::Alpha), 2);
        assert_eq!(engine.count(Side::Beta), 2);
        assert_eq!(board.count_with_state(CellState::Free), 45);
    }

    #[test]
    fn init_board_seed_events_use_center_cause() {
        let mut engine = Engine::default();
        let events = engine.init_board();
        for event in &events[1..] {
            match event {
                BoardEvent::Cell(change) => assert_eq!(change.cause, Pos::new(4, 4)),
                other => panic!("expected a cell event, got {:?}", other),
            }
        }
    }

    #[test]
    fn init_board_restarts_a_dirty_game() {
        let mut engine = seeded_engine();
        engine
            .execute(Pos::new(0, 0), Pos::new(1, 1), Side::Beta)
            .unwrap();
        engine.init_board();
        assert_eq!(engine.count(Side::Beta), 2);
        assert_eq!(engine.count(Side::Alpha), 2);
    }

    #[test]
    fn counts_always_partition_the_grid() {
        let mut engine = seeded_engine();
        engine
            .execute(Pos::new(0, 6), Pos::new(2, 6), Side::Alpha)
            .unwrap();
        let board = engine.board();
        let total = engine.count(Side::Alpha)
            + engine.count(Side::Beta)
            + board.count_with_state(CellState::Free);
        assert_eq!(total, 49);
    }

    #[test]
    fn execute_delegates_precondition_errors() {
        let mut engine = seeded_engine();
        let err = engine
            .execute(Pos::new(3, 3), Pos::new(3, 4), Side::Alpha)
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::OriginNotHeld {
                origin: Pos::new(3, 3)
            }
        );
    }

    #[test]
    fn fresh_board_has_playable_origins_for_both_sides() {
        let engine = seeded_engine();
        assert_eq!(engine.playable_origins(Side::Alpha).len(), 2);
        assert_eq!(engine.playable_origins(Side::Beta).len(), 2);
        assert!(engine.has_free_cell());
    }

    #[test]
    fn play_automated_mutates_and_reports() {
        let mut engine = seeded_engine();
        let chosen = engine.choose_move(Side::Beta).unwrap();
        let changes = engine.play_automated(Side::Beta).unwrap().unwrap();
        assert!(changes
            .iter()
            .any(|c| c.pos == chosen.1 && c.state == CellState::Held(Side::Beta)));
        assert!(engine.count(Side::Beta) >= 3);
    }

    #[test]
    fn non_default_grid_seeds_its_own_corners() {
        let mut engine = Engine::new(BoardConfig {
            columns: 5,
            rows: 4,
            max_move_distance: 2,
        });
        engine.init_board();
        let board = engine.board();
        assert_eq!(board.get(Pos::new(0, 0)), Ok(CellState::Held(Side::Beta)));
        assert_eq!(board.get(Pos::new(4, 3)), Ok(CellState::Held(Side::Beta)));
        assert_eq!(board.get(Pos::new(0, 3)), Ok(CellState::Held(Side::Alpha)));
        assert_eq!(board.get(Pos::new(4, 0)), Ok(CellState::Held(Side::Alpha)));
    }
}
