//! Diagonal single-step generation over whole masks.

use crate::game_state::chess_rules::{NOT_FILE_A, NOT_FILE_H};
use crate::game_state::chess_types::Bitboard;

/// Every square one diagonal step away from any set bit.
#[inline]
pub const fn bishop_steps(bishops: Bitboard) -> Bitboard {
    ((bishops & NOT_FILE_A) << 9)
        | ((bishops & NOT_FILE_H) << 7)
        | ((bishops & NOT_FILE_A) >> 7)
        | ((bishops & NOT_FILE_H) >> 9)
}
