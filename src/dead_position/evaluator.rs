//! Deadness evaluator.
//!
//! Decides whether a king/pawn/bishop position can never reach a decisive
//! result. The verdict is a straight-line computation with early exits: pawn
//! blockage, pawn push closures, promotion, closures for kings and bishops,
//! capture reachability and finally the corner mate patterns.
//!
//! Everything here is a pure function of its input and safe to call from any
//! number of threads at once.

use crate::dead_position::corner_mates::{find_corner_mate, Corner};
use crate::dead_position::reachability::{blockage, pawn_reach_both, side_reach};
use crate::game_state::chess_rules::{RANK_1, RANK_8};
use crate::game_state::chess_types::{Bitboard, Color};
use crate::game_state::dead_state::DeadState;
use crate::utils::fen_parser::{parse_position, ParsedPosition};

/// Why a position is still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiveReason {
    /// Material other than kings, pawns and bishops is on the board.
    UnmodeledMaterial,
    /// A pawn of this colour can push to its last rank.
    Promotion(Color),
    /// A pawn or bishop of this colour can eventually take an enemy pawn or bishop.
    MinorPieceCapture(Color),
    /// The king of this colour can walk onto an enemy pawn square.
    KingCapturesPawn(Color),
    /// A bishop mate against a king boxed in by its own pieces.
    CornerMate(Corner),
}

impl std::fmt::Display for LiveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiveReason::UnmodeledMaterial => write!(f, "unmodeled-material"),
            LiveReason::Promotion(color) => write!(f, "promotion({color})"),
            LiveReason::MinorPieceCapture(color) => write!(f, "minor-capture({color})"),
            LiveReason::KingCapturesPawn(color) => write!(f, "king-captures-pawn({color})"),
            LiveReason::CornerMate(corner) => write!(f, "corner-mate({corner})"),
        }
    }
}

/// Verdict plus the informational material flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeadPositionResult {
    pub dead: bool,
    pub has_pawns: bool,
    pub has_bishops: bool,
}

#[inline]
const fn promotion_rank(color: Color) -> Bitboard {
    match color {
        Color::Light => RANK_8,
        Color::Dark => RANK_1,
    }
}

#[inline]
pub fn is_dead(state: &DeadState) -> bool {
    liveness_reason(state).is_none()
}

/// The first check that proves the position alive, or `None` when it is dead.
pub fn liveness_reason(state: &DeadState) -> Option<LiveReason> {
    if !state.has_pawns() && !state.has_bishops() {
        return None;
    }

    let blocked = [
        blockage(state, Color::Light),
        blockage(state, Color::Dark),
    ];
    let pawn_moves = pawn_reach_both(state, &blocked);

    for color in [Color::Light, Color::Dark] {
        if pawn_moves[color.index()] & promotion_rank(color) != 0 {
            return Some(LiveReason::Promotion(color));
        }
    }

    let reach = side_reach(state, &blocked, &pawn_moves);
    log::trace!("blockage={blocked:?} reach={reach:?}");

    for color in [Color::Light, Color::Dark] {
        let own = &reach[color.index()];
        let enemy = &reach[color.opposite().index()];
        if own.minor_attacks() & enemy.minor_material() != 0 {
            return Some(LiveReason::MinorPieceCapture(color));
        }
    }

    // Kings are only checked against pawns; a bishop that is not frozen can
    // always step away.
    for color in [Color::Light, Color::Dark] {
        if reach[color.index()].kings & reach[color.opposite().index()].pawns != 0 {
            return Some(LiveReason::KingCapturesPawn(color));
        }
    }

    find_corner_mate(state, &reach).map(LiveReason::CornerMate)
}

/// Parse a position string and judge it.
///
/// Positions carrying unmodeled material are never passed to the evaluator;
/// the material flags still describe whatever pawns and bishops were read.
pub fn evaluate_fen(text: &str) -> DeadPositionResult {
    evaluate_fen_with_reason(text).0
}

/// Like [`evaluate_fen`], also returning the reason a live position is alive.
pub fn evaluate_fen_with_reason(text: &str) -> (DeadPositionResult, Option<LiveReason>) {
    let verdict = evaluate_parsed(&parse_position(text));
    log::debug!("{text:?} -> {:?}", verdict.1);
    verdict
}

/// Judge a loaded position, short-circuiting on unmodeled material.
pub fn evaluate_parsed(parsed: &ParsedPosition) -> (DeadPositionResult, Option<LiveReason>) {
    let reason = if parsed.has_other_pieces {
        Some(LiveReason::UnmodeledMaterial)
    } else {
        liveness_reason(&parsed.state)
    };

    let result = DeadPositionResult {
        dead: reason.is_none(),
        has_pawns: parsed.state.has_pawns(),
        has_bishops: parsed.state.has_bishops(),
    };
    (result, reason)
}
