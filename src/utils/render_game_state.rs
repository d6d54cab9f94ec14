//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the modeled piece masks for
//! debugging, tests, and the command-line `--render` flag.

use crate::game_state::chess_types::*;
use crate::game_state::dead_state::DeadState;

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_dead_state(state: &DeadState) -> String {
    render_with_overlay(state, 0)
}

/// Like [`render_dead_state`], marking empty squares set in `overlay` with `•`.
/// Useful for looking at a reachability mask against the position.
pub fn render_with_overlay(state: &DeadState, overlay: Bitboard) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            let square = square_from_coords(rank, file);
            let piece = square.and_then(|sq| state.piece_on(sq));
            let marked = square.is_some_and(|sq| overlay & square_bit(sq) != 0);
            match (piece, marked) {
                (Some((color, kind)), _) => out.push(piece_to_unicode(color, kind)),
                (None, true) => out.push('•'),
                (None, false) => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_dead_state, render_with_overlay};
    use crate::game_state::chess_rules::RANK_1;
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn render_places_pieces_on_their_rows() {
        let parsed = parse_position("k7/8/8/8/8/8/4P3/4K3 w - -");
        let board = render_dead_state(&parsed.state);
        println!("\n{board}");

        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♚ · · · · · · · 8");
        assert_eq!(lines[7], "2 · · · · ♙ · · · 2");
        assert_eq!(lines[8], "1 · · · · ♔ · · · 1");
    }

    #[test]
    fn overlay_marks_only_empty_squares() {
        let parsed = parse_position("8/8/8/8/8/8/8/4K3 w - -");
        let board = render_with_overlay(&parsed.state, RANK_1);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[8], "1 • • • • ♔ • • • 1");
    }
}
