//! Contagion engine library.
//!
//! Exposes the board representation, move resolution, candidate queries,
//! and the heuristic opponent for use by integration tests and the
//! self-play binary.

pub mod board;
pub mod engine;
pub mod movegen;
pub mod resolve;
pub mod selfplay;
pub mod strategy;
