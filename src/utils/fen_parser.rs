//! Position-string loader.
//!
//! Reads up to four space-separated fields: piece placement, side to move,
//! castling (skipped) and en-passant target. The default loader is lenient: it
//! never fails, unknown characters are recorded as unmodeled material and
//! out-of-range values are dropped. `parse_position_strict` is an opt-in
//! validating front end that accepts standard six-field FEN.
//!
//! An en-passant target injects a phantom pawn of the side that just moved on
//! the named square. Capture rights are not modeled.

use crate::errors::PositionError;
use crate::game_state::chess_types::*;
use crate::game_state::dead_state::DeadState;
use crate::utils::algebraic::algebraic_to_square;

/// Loader output: the modeled masks plus whether anything else was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedPosition {
    pub state: DeadState,
    pub has_other_pieces: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

/// Parse with the chosen mode. Lenient parsing always succeeds.
pub fn parse_with_mode(text: &str, mode: ParseMode) -> Result<ParsedPosition, PositionError> {
    match mode {
        ParseMode::Lenient => Ok(parse_position(text)),
        ParseMode::Strict => parse_position_strict(text),
    }
}

pub fn parse_position(text: &str) -> ParsedPosition {
    let mut parsed = ParsedPosition::default();
    let mut fields = text.split(' ');

    if let Some(board_part) = fields.next() {
        parsed.has_other_pieces = place_pieces(board_part, &mut parsed.state);
    }
    if let Some(side_part) = fields.next() {
        for ch in side_part.chars() {
            match ch {
                'w' => parsed.state.side_to_move = Color::Light,
                'b' => parsed.state.side_to_move = Color::Dark,
                _ => {}
            }
        }
    }
    let _castling = fields.next();
    if let Some(en_passant_part) = fields.next() {
        inject_en_passant_pawn(en_passant_part, &mut parsed.state);
    }

    parsed
}

/// Walk the placement field, returning true when unmodeled material was seen.
fn place_pieces(board_part: &str, state: &mut DeadState) -> bool {
    let mut rank: i32 = 7;
    let mut file: i32 = 0;
    let mut has_other_pieces = false;

    for ch in board_part.chars() {
        match ch {
            '/' => {
                rank -= 1;
                file = 0;
            }
            '1'..='8' => file += ch as i32 - '0' as i32,
            _ => {
                let target = match ch {
                    'K' => Some(&mut state.kings[Color::Light.index()]),
                    'k' => Some(&mut state.kings[Color::Dark.index()]),
                    'P' => Some(&mut state.pawns[Color::Light.index()]),
                    'p' => Some(&mut state.pawns[Color::Dark.index()]),
                    'B' => Some(&mut state.bishops[Color::Light.index()]),
                    'b' => Some(&mut state.bishops[Color::Dark.index()]),
                    _ => None,
                };
                match target {
                    Some(mask) => {
                        if let Some(square) = square_from_coords(rank, file) {
                            *mask |= square_bit(square);
                        }
                    }
                    None => has_other_pieces = true,
                }
                file += 1;
            }
        }
    }

    has_other_pieces
}

fn inject_en_passant_pawn(en_passant_part: &str, state: &mut DeadState) {
    let Ok(square) = algebraic_to_square(en_passant_part) else {
        return;
    };
    let phantom = state.side_to_move.opposite();
    state.pawns[phantom.index()] |= square_bit(square);
}

/// Validating loader. On success the result equals `parse_position(text)`.
pub fn parse_position_strict(text: &str) -> Result<ParsedPosition, PositionError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(PositionError::FieldCount(fields.len()));
    }

    validate_board(fields[0])?;
    let side_to_move = match fields[1] {
        "w" => Color::Light,
        "b" => Color::Dark,
        other => return Err(PositionError::InvalidSideToMove(other.to_owned())),
    };
    validate_castling(fields[2])?;
    validate_en_passant(fields[3], side_to_move)?;
    for counter in &fields[4..] {
        counter
            .parse::<u16>()
            .map_err(|_| PositionError::InvalidCounter((*counter).to_owned()))?;
    }

    let parsed = parse_position(&fields[..4].join(" "));

    let light = parsed.state.kings(Color::Light).count_ones();
    let dark = parsed.state.kings(Color::Dark).count_ones();
    if light != 1 || dark != 1 {
        return Err(PositionError::KingCount { light, dark });
    }

    Ok(parsed)
}

fn validate_board(board_part: &str) -> Result<(), PositionError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(PositionError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let mut files = 0usize;
        for ch in rank_str.chars() {
            match ch {
                '1'..='8' => files += ch as usize - '0' as usize,
                'K' | 'Q' | 'R' | 'B' | 'N' | 'P' | 'k' | 'q' | 'r' | 'b' | 'n' | 'p' => files += 1,
                _ => return Err(PositionError::InvalidPiece(ch)),
            }
        }
        if files != 8 {
            return Err(PositionError::RankWidth {
                rank: 8 - fen_rank_idx,
                files,
            });
        }
    }

    Ok(())
}

fn validate_castling(castling_part: &str) -> Result<(), PositionError> {
    if castling_part == "-" {
        return Ok(());
    }

    let mut seen = String::new();
    for ch in castling_part.chars() {
        if !"KQkq".contains(ch) || seen.contains(ch) {
            return Err(PositionError::InvalidCastling(castling_part.to_owned()));
        }
        seen.push(ch);
    }

    Ok(())
}

fn validate_en_passant(en_passant_part: &str, side_to_move: Color) -> Result<(), PositionError> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let expected_rank = match side_to_move {
        Color::Light => '6',
        Color::Dark => '3',
    };
    let valid = algebraic_to_square(en_passant_part).is_ok()
        && en_passant_part.ends_with(expected_rank);
    if valid {
        Ok(())
    } else {
        Err(PositionError::InvalidEnPassant(en_passant_part.to_owned()))
    }
}
