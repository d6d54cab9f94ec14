//! DeadState-to-position-string writer.
//!
//! Produces the four fields the loader reads. Castling and en passant are
//! always written as `-`, so a phantom en-passant pawn is written as a real one.

use crate::game_state::chess_types::*;
use crate::game_state::dead_state::DeadState;

pub fn state_to_fen(state: &DeadState) -> String {
    let board = generate_board_field(state);
    let side_to_move = match state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };

    format!("{board} {side_to_move} - -")
}

fn generate_board_field(state: &DeadState) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            let Some(square) = square_from_coords(rank, file) else {
                continue;
            };
            if let Some((color, piece)) = state.piece_on(square) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char(color));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}
