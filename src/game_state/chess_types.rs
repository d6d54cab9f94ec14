//! Core value types shared by the loader and the deadness evaluator.
//!
//! Board masks use the layout `bit = rank * 8 + (7 - file)`, so every byte of
//! a mask is one rank row: shifting by 8 moves a whole rank, shifting by 1
//! moves one file (towards the a-file for `<< 1`).

/// 64-bit board mask, one bit per square.
pub type Bitboard = u64;

/// Square index (`0..=63`) in the board-mask layout above. `h1 == 0`, `a8 == 63`.
pub type Square = u8;

/// Side to move / piece colour. `Light` is white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Light => write!(f, "white"),
            Color::Dark => write!(f, "black"),
        }
    }
}

/// Piece kinds the evaluator models. Everything else is unmodeled material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Pawn,
    Bishop,
}

impl PieceKind {
    /// Lower-case placement letter; upper-case is the light side.
    #[inline]
    pub const fn fen_char(self, color: Color) -> char {
        let lower = match self {
            PieceKind::King => 'k',
            PieceKind::Pawn => 'p',
            PieceKind::Bishop => 'b',
        };
        match color {
            Color::Light => lower.to_ascii_uppercase(),
            Color::Dark => lower,
        }
    }
}

/// Build a square index from zero-based rank and file coordinates.
///
/// Returns `None` when the resulting index falls outside the board. A file past
/// `h` with a valid rank wraps into the next rank row down, matching how
/// placement text with too many squares in a row is read.
#[inline]
pub const fn square_from_coords(rank: i32, file: i32) -> Option<Square> {
    let index = rank * 8 + 7 - file;
    if index < 0 || index > 63 {
        None
    } else {
        Some(index as Square)
    }
}

/// One-hot mask for a square.
#[inline]
pub const fn square_bit(square: Square) -> Bitboard {
    1u64 << square
}
