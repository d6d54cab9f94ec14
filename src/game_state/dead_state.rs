//! Piece masks consumed by the deadness evaluator.
//!
//! `DeadState` carries only the material the evaluator models: kings, pawns and
//! bishops for each colour, plus the side to move. It is a plain value; the
//! loader builds it once and the evaluator reads it once.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeadState {
    // [color]
    pub kings: [Bitboard; 2],
    pub pawns: [Bitboard; 2],
    pub bishops: [Bitboard; 2],

    pub side_to_move: Color,
}

impl DeadState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn kings(&self, color: Color) -> Bitboard {
        self.kings[color.index()]
    }

    #[inline]
    pub fn pawns(&self, color: Color) -> Bitboard {
        self.pawns[color.index()]
    }

    #[inline]
    pub fn bishops(&self, color: Color) -> Bitboard {
        self.bishops[color.index()]
    }

    #[inline]
    pub fn has_pawns(&self) -> bool {
        self.pawns[0] != 0 || self.pawns[1] != 0
    }

    #[inline]
    pub fn has_bishops(&self) -> bool {
        self.bishops[0] != 0 || self.bishops[1] != 0
    }

    /// Union of every modeled piece of one colour.
    #[inline]
    pub fn occupancy_by_color(&self, color: Color) -> Bitboard {
        let i = color.index();
        self.kings[i] | self.pawns[i] | self.bishops[i]
    }

    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.occupancy_by_color(Color::Light) | self.occupancy_by_color(Color::Dark)
    }

    /// First modeled piece found on `square`, light side first.
    pub fn piece_on(&self, square: Square) -> Option<(Color, PieceKind)> {
        let mask = square_bit(square);
        for color in [Color::Light, Color::Dark] {
            let i = color.index();
            for (kind, bits) in [
                (PieceKind::King, self.kings[i]),
                (PieceKind::Pawn, self.pawns[i]),
                (PieceKind::Bishop, self.bishops[i]),
            ] {
                if bits & mask != 0 {
                    return Some((color, kind));
                }
            }
        }
        None
    }

    /// True when no two masks claim the same square.
    pub fn is_consistent(&self) -> bool {
        let masks = [
            self.kings[0],
            self.kings[1],
            self.pawns[0],
            self.pawns[1],
            self.bishops[0],
            self.bishops[1],
        ];
        let total: u32 = masks.iter().map(|m| m.count_ones()).sum();
        total == masks.iter().fold(0u64, |acc, m| acc | m).count_ones()
    }

    /// Reflect the board left-right (file `f` becomes `7 - f`).
    pub fn mirrored(&self) -> Self {
        let flip = |mask: Bitboard| mask.reverse_bits().swap_bytes();
        Self {
            kings: self.kings.map(flip),
            pawns: self.pawns.map(flip),
            bishops: self.bishops.map(flip),
            side_to_move: self.side_to_move,
        }
    }

    /// Reflect the board top-bottom and swap the colours of every piece,
    /// including the side to move.
    pub fn color_flipped(&self) -> Self {
        let flip = |pair: [Bitboard; 2]| [pair[1].swap_bytes(), pair[0].swap_bytes()];
        Self {
            kings: flip(self.kings),
            pawns: flip(self.pawns),
            bishops: flip(self.bishops),
            side_to_move: self.side_to_move.opposite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeadState;
    use crate::game_state::chess_rules::{A1, A8, H1, H8};
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn mirror_swaps_corners_on_the_same_rank() {
        let mut state = DeadState::new_empty();
        state.kings[Color::Light.index()] = A1;
        state.bishops[Color::Dark.index()] = H8;

        assert_eq!(state.piece_on(7), Some((Color::Light, PieceKind::King)));
        assert_eq!(state.piece_on(6), None);

        let mirrored = state.mirrored();
        assert_eq!(mirrored.kings(Color::Light), H1);
        assert_eq!(mirrored.bishops(Color::Dark), A8);
        assert_eq!(mirrored.mirrored(), state);
    }

    #[test]
    fn color_flip_swaps_sides_and_ranks() {
        let mut state = DeadState::new_empty();
        state.kings[Color::Light.index()] = A1;
        state.pawns[Color::Dark.index()] = 1u64 << 48;

        let flipped = state.color_flipped();
        assert_eq!(flipped.kings(Color::Dark), A8);
        assert_eq!(flipped.pawns(Color::Light), 1u64 << 8);
        assert_eq!(flipped.side_to_move, Color::Dark);
        assert_eq!(flipped.color_flipped(), state);
    }

    #[test]
    fn overlapping_masks_are_inconsistent() {
        let mut state = DeadState::new_empty();
        state.kings[0] = A1;
        state.pawns[1] = H8;
        assert!(state.is_consistent());

        state.bishops[1] = A1;
        assert!(!state.is_consistent());
        assert!(state.has_bishops());
        assert!(state.has_pawns());
    }
}
