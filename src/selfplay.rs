//! Self-play game driver.
//!
//! Plays complete games by alternating the two sides, each driven by a
//! configurable policy (the heuristic opponent or a uniformly random
//! legal move), and records per-move and per-game data as JSONL. This is
//! the external turn controller realized as a data harness: the engine
//! itself only ever sees one `execute` call at a time.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{Board, BoardConfig, Pos, Side};
use crate::engine::Engine;
use crate::movegen::{playable_origins, reachable_free_cells};
use crate::resolve::MoveKind;
use crate::strategy;

/// How a side picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Policy {
    /// The deterministic heuristic opponent.
    Heuristic,
    /// A uniformly random playable origin and reachable destination.
    Random,
}

/// Configuration for a self-play run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Board dimensions and move range.
    pub board: BoardConfig,
    /// Policy for the alpha side (moves first).
    pub alpha: Policy,
    /// Policy for the beta side.
    pub beta: Policy,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Hard bound on turns per game.
    pub max_turns: u32,
    /// Suppress the per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            board: BoardConfig::default(),
            alpha: Policy::Random,
            beta: Policy::Heuristic,
            seed: 0,
            max_turns: 500,
            quiet: false,
        }
    }
}

/// One applied move within a game.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoveRecord {
    pub turn: u32,
    pub side: Side,
    pub origin: Pos,
    pub dest: Pos,
    pub kind: MoveKind,
    /// Number of opposing cells flipped by the placement.
    pub contaminated: usize,
}

/// A complete recorded game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub board: BoardConfig,
    pub moves: Vec<MoveRecord>,
    pub turns: u32,
    /// Side holding more cells at the end; `None` on a tie.
    pub winner: Option<Side>,
    pub final_alpha: usize,
    pub final_beta: usize,
}

/// Picks a uniformly random legal move for `side`, or `None` when the
/// side has no playable origin.
pub fn random_move(board: &Board, side: Side, rng: &mut impl Rng) -> Option<(Pos, Pos)> {
    let origins = playable_origins(board, side);
    if origins.is_empty() {
        return None;
    }
    let origin = origins[rng.gen_range(0..origins.len())];
    // Playable origins always have at least one reachable free cell.
    let reachable = reachable_free_cells(board, origin);
    let dest = reachable[rng.gen_range(0..reachable.len())];
    Some((origin, dest))
}

fn pick_move(board: &Board, side: Side, policy: Policy, rng: &mut SmallRng) -> Option<(Pos, Pos)> {
    match policy {
        Policy::Heuristic => strategy::choose_move(board, side),
        Policy::Random => random_move(board, side, rng),
    }
}

/// Plays a single game and returns its record.
///
/// Alpha moves first. A side with no playable origin passes; the game
/// ends when the board has no free cell, either side is eliminated, both
/// sides pass consecutively, or the turn bound is hit.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut engine = Engine::new(config.board);
    engine.init_board();

    let mut moves: Vec<MoveRecord> = Vec::new();
    let mut side = Side::Alpha;
    let mut turn = 0u32;
    let mut consecutive_passes = 0u32;

    loop {
        if turn >= config.max_turns
            || !engine.has_free_cell()
            || engine.count(Side::Alpha) == 0
            || engine.count(Side::Beta) == 0
        {
            break;
        }

        let policy = match side {
            Side::Alpha => config.alpha,
            Side::Beta => config.beta,
        };

        match pick_move(engine.board(), side, policy, rng) {
            Some((origin, dest)) => {
                let kind = MoveKind::classify(origin, dest);
                let changes = engine
                    .execute(origin, dest, side)
                    .expect("policies only propose legal moves");
                // Effects are vacate (relocate only) + placement + flips.
                let contaminated = changes.len()
                    - match kind {
                        MoveKind::Clone => 1,
                        MoveKind::Relocate => 2,
                    };
                moves.push(MoveRecord {
                    turn,
                    side,
                    origin,
                    dest,
                    kind,
                    contaminated,
                });
                consecutive_passes = 0;
            }
            None => {
                consecutive_passes += 1;
                if consecutive_passes >= 2 {
                    break;
                }
            }
        }

        turn += 1;
        side = side.opponent();
    }

    let final_alpha = engine.count(Side::Alpha);
    let final_beta = engine.count(Side::Beta);
    let winner = if final_alpha > final_beta {
        Some(Side::Alpha)
    } else if final_beta > final_alpha {
        Some(Side::Beta)
    } else {
        None
    };

    GameRecord {
        game_id,
        board: config.board,
        moves,
        turns: turn,
        winner,
        final_alpha,
        final_beta,
    }
}

/// Plays the configured number of games sequentially.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut rng = if config.seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(config.seed)
    };

    let mut games = Vec::with_capacity(config.num_games);
    for game_id in 0..config.num_games {
        let game = play_game(config, game_id, &mut rng);
        if !config.quiet {
            eprintln!(
                "game {}: {} turns, alpha {} / beta {}, winner {}",
                game.game_id,
                game.turns,
                game.final_alpha,
                game.final_beta,
                game.winner.map_or("draw", Side::name),
            );
        }
        games.push(game);
    }
    games
}

/// Writes one JSON object per game.
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    for game in games {
        let line = serde_json::to_string(game)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Prints aggregate statistics to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut alpha_wins = 0usize;
    let mut beta_wins = 0usize;
    let mut draws = 0usize;
    let mut total_turns = 0u64;
    let mut total_contaminated = 0u64;

    for game in games {
        match game.winner {
            Some(Side::Alpha) => alpha_wins += 1,
            Some(Side::Beta) => beta_wins += 1,
            None => draws += 1,
        }
        total_turns += u64::from(game.turns);
        total_contaminated += game.moves.iter().map(|m| m.contaminated as u64).sum::<u64>();
    }

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg turns/game: {:.1}",
        total_turns as f64 / total.max(1) as f64
    );
    eprintln!(
        "Avg flips/game: {:.1}",
        total_contaminated as f64 / total.max(1) as f64
    );
    eprintln!(
        "Alpha wins: {} ({:.1}%)",
        alpha_wins,
        100.0 * alpha_wins as f64 / total.max(1) as f64
    );
    eprintln!(
        "Beta wins:  {} ({:.1}%)",
        beta_wins,
        100.0 * beta_wins as f64 / total.max(1) as f64
    );
    eprintln!("Draws:      {}", draws);
}
