//! Square and bitboard conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the
//! `rank * 8 + (7 - file)` square indexing used by every board mask.

use crate::game_state::chess_types::{square_bit, Bitboard, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let file_index = file - b'a';
    let rank_index = rank - b'1';
    Ok(rank_index * 8 + (7 - file_index))
}

/// Convert algebraic notation (for example: "e4") to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> Result<Bitboard, String> {
    algebraic_to_square(square).map(square_bit)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square > 63 {
        return Err(format!("Square index out of bounds: {square}"));
    }

    let file = 7 - square % 8;
    let rank = square / 8;
    let file_char = char::from(b'a' + file);
    let rank_char = char::from(b'1' + rank);

    Ok(format!("{file_char}{rank_char}"))
}

/// Render every set bit of a mask as a space-separated square list, a8 first.
pub fn bitboard_to_square_list(bitboard: Bitboard) -> String {
    let mut squares = Vec::with_capacity(bitboard.count_ones() as usize);
    let mut remaining = bitboard;
    while remaining != 0 {
        let square = 63 - remaining.leading_zeros() as Square;
        if let Ok(name) = square_to_algebraic(square) {
            squares.push(name);
        }
        remaining &= !square_bit(square);
    }
    squares.join(" ")
}

#[cfg(test)]
mod tests {
    use super::{
        algebraic_to_bitboard, algebraic_to_square, bitboard_to_square_list, square_to_algebraic,
    };

    #[test]
    fn square_conversions_follow_rank_rows() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 7);
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), 0);
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), 63);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "h1");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "a8");
    }

    #[test]
    fn e4_maps_into_the_fourth_byte() {
        let e4 = algebraic_to_bitboard("e4").expect("e4 should parse");
        assert_eq!(e4, 1u64 << 27);
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_square("-").is_err());
        assert!(algebraic_to_square("i3").is_err());
        assert!(algebraic_to_square("e9").is_err());
        assert!(algebraic_to_square("e33").is_err());
        assert!(square_to_algebraic(64).is_err());
    }

    #[test]
    fn square_list_is_ordered_from_a8() {
        let mask = algebraic_to_bitboard("h1").expect("h1") | algebraic_to_bitboard("a8").expect("a8");
        assert_eq!(bitboard_to_square_list(mask), "a8 h1");
        assert_eq!(bitboard_to_square_list(0), "");
    }
}
