//! Pawn push, attack and blockage masks.
//!
//! Light pawns advance towards rank 8 (`<< 8`), dark pawns towards rank 1
//! (`>> 8`). Attacks are the two forward diagonals with file guards applied.

use crate::game_state::chess_rules::{NOT_FILE_A, NOT_FILE_H};
use crate::game_state::chess_types::{Bitboard, Color};

/// Squares one rank ahead of every pawn, ignoring occupancy.
#[inline]
pub const fn pawn_pushes(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::Light => pawns << 8,
        Color::Dark => pawns >> 8,
    }
}

#[inline]
pub const fn pawn_attacks(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::Light => ((pawns & NOT_FILE_A) << 9) | ((pawns & NOT_FILE_H) << 7),
        Color::Dark => ((pawns & NOT_FILE_A) >> 7) | ((pawns & NOT_FILE_H) >> 9),
    }
}

/// Pawns of `color` whose forward square holds an enemy pawn.
#[inline]
pub const fn blocked_pawns(color: Color, own_pawns: Bitboard, enemy_pawns: Bitboard) -> Bitboard {
    match color {
        Color::Light => ((own_pawns << 8) & enemy_pawns) >> 8,
        Color::Dark => ((own_pawns >> 8) & enemy_pawns) << 8,
    }
}

#[cfg(test)]
mod tests {
    use super::{blocked_pawns, pawn_attacks, pawn_pushes};
    use crate::game_state::chess_types::Color;
    use crate::utils::algebraic::algebraic_to_bitboard;

    fn bb(square: &str) -> u64 {
        algebraic_to_bitboard(square).expect("square should parse")
    }

    #[test]
    fn light_pawn_attacks_from_e2() {
        assert_eq!(pawn_attacks(Color::Light, bb("e2")), bb("d3") | bb("f3"));
        assert_eq!(pawn_pushes(Color::Light, bb("e2")), bb("e3"));
    }

    #[test]
    fn dark_pawn_attacks_from_e7() {
        assert_eq!(pawn_attacks(Color::Dark, bb("e7")), bb("d6") | bb("f6"));
        assert_eq!(pawn_pushes(Color::Dark, bb("e7")), bb("e6"));
    }

    #[test]
    fn edge_pawns_attack_a_single_square() {
        assert_eq!(pawn_attacks(Color::Light, bb("a4")), bb("b5"));
        assert_eq!(pawn_attacks(Color::Dark, bb("h5")), bb("g4"));
    }

    #[test]
    fn face_to_face_pawns_block_each_other() {
        let light = bb("e4") | bb("d2");
        let dark = bb("e5") | bb("c7");
        assert_eq!(blocked_pawns(Color::Light, light, dark), bb("e4"));
        assert_eq!(blocked_pawns(Color::Dark, dark, light), bb("e5"));
    }
}
