//! Crate root module declarations for the dead-position evaluator.
//!
//! This file exposes the subsystems (piece masks, single-step move
//! generators, reachability closures and the deadness verdict, plus the
//! position loader and its helpers) so the binary, benchmarks, and external
//! callers can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod dead_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod pawn_moves;
}

pub mod dead_position {
    pub mod corner_mates;
    pub mod evaluator;
    pub mod reachability;
}

pub mod utils {
    pub mod algebraic;
    pub mod batch;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod position_generator;
    pub mod render_game_state;
}

pub use dead_position::evaluator::{
    evaluate_fen, is_dead, liveness_reason, DeadPositionResult, LiveReason,
};
pub use game_state::dead_state::DeadState;
pub use utils::fen_parser::{parse_position, parse_position_strict, ParsedPosition};
