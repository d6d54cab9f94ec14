//! Board-mask constants used by the shift generators and mate patterns.
//!
//! All masks follow the `bit = rank * 8 + (7 - file)` layout, written as eight
//! one-byte rank rows from rank 8 (most significant byte) to rank 1.

use crate::game_state::chess_types::Bitboard;

/// Every square except the a-file. Guards shifts that move towards the a-file.
pub const NOT_FILE_A: Bitboard =
    0b01111111_01111111_01111111_01111111_01111111_01111111_01111111_01111111;
/// Every square except the h-file. Guards shifts that move towards the h-file.
pub const NOT_FILE_H: Bitboard =
    0b11111110_11111110_11111110_11111110_11111110_11111110_11111110_11111110;

pub const RANK_8: Bitboard =
    0b11111111_00000000_00000000_00000000_00000000_00000000_00000000_00000000;
pub const RANK_1: Bitboard =
    0b00000000_00000000_00000000_00000000_00000000_00000000_00000000_11111111;

pub const A8: Bitboard = 1 << 63;
pub const B8: Bitboard = 1 << 62;
pub const G8: Bitboard = 1 << 57;
pub const H8: Bitboard = 1 << 56;
pub const A7: Bitboard = 1 << 55;
pub const H7: Bitboard = 1 << 48;

pub const A2: Bitboard = 1 << 15;
pub const H2: Bitboard = 1 << 8;
pub const A1: Bitboard = 1 << 7;
pub const B1: Bitboard = 1 << 6;
pub const G1: Bitboard = 1 << 1;
pub const H1: Bitboard = 1 << 0;

/// Standard chess starting position. Not dead: it carries unmodeled material.
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
