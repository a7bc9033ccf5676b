//! Self-play CLI.
//!
//! Plays contamination games between two configurable policies and
//! outputs one JSON game record per line.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N         Number of games to play (default: 10)
//!   --alpha POLICY    Policy for the alpha side: heuristic|random (default: random)
//!   --beta POLICY     Policy for the beta side: heuristic|random (default: heuristic)
//!   --columns N       Grid width (default: 7)
//!   --rows N          Grid height (default: 7)
//!   --max-distance N  Maximum move distance (default: 2)
//!   --max-turns N     Turn bound per game (default: 500)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --output FILE     Output file path (default: stdout)
//!   --quiet           Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};

use contagion::selfplay::{self, Policy, SelfPlayConfig};

fn parse_policy(value: &str) -> Policy {
    match value {
        "heuristic" => Policy::Heuristic,
        "random" => Policy::Random,
        other => {
            eprintln!("Unknown policy: {} (expected heuristic|random)", other);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--alpha" => {
                i += 1;
                config.alpha = parse_policy(&args[i]);
            }
            "--beta" => {
                i += 1;
                config.beta = parse_policy(&args[i]);
            }
            "--columns" => {
                i += 1;
                config.board.columns = args[i].parse().expect("invalid --columns value");
            }
            "--rows" => {
                i += 1;
                config.board.rows = args[i].parse().expect("invalid --rows value");
            }
            "--max-distance" => {
                i += 1;
                config.board.max_move_distance =
                    args[i].parse().expect("invalid --max-distance value");
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = args[i].parse().expect("invalid --max-turns value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config.quiet = quiet;

    if !quiet {
        eprintln!(
            "Self-play: {} games on a {}x{} grid, alpha={:?}, beta={:?}, seed {}",
            config.num_games,
            config.board.columns,
            config.board.rows,
            config.alpha,
            config.beta,
            config.seed
        );
    }

    let games = selfplay::run_self_play(&config);

    if !quiet {
        selfplay::print_summary(&games);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
            if !quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N         Number of games to play (default: 10)");
    eprintln!("  --alpha POLICY    Policy for the alpha side: heuristic|random (default: random)");
    eprintln!("  --beta POLICY     Policy for the beta side: heuristic|random (default: heuristic)");
    eprintln!("  --columns N       Grid width (default: 7)");
    eprintln!("  --rows N          Grid height (default: 7)");
    eprintln!("  --max-distance N  Maximum move distance (default: 2)");
    eprintln!("  --max-turns N     Turn bound per game (default: 500)");
    eprintln!("  --seed N          Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE     Output file path (default: stdout)");
    eprintln!("  --quiet           Suppress progress and summary output");
    eprintln!("  --help            Show this help");
}
