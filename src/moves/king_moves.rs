//! King step generation over whole masks.
//!
//! Moves every set bit one square in each of the eight directions at once.
//! File guards drop bits that would otherwise wrap onto the opposite edge.

use crate::game_state::chess_rules::{NOT_FILE_A, NOT_FILE_H};
use crate::game_state::chess_types::Bitboard;

#[inline]
pub const fn king_steps(kings: Bitboard) -> Bitboard {
    ((kings & NOT_FILE_A) << 9)
        | (kings << 8)
        | ((kings & NOT_FILE_H) << 7)
        | ((kings & NOT_FILE_A) << 1)
        | ((kings & NOT_FILE_H) >> 1)
        | ((kings & NOT_FILE_A) >> 7)
        | (kings >> 8)
        | ((kings & NOT_FILE_H) >> 9)
}
