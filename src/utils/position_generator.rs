//! Random king/pawn/bishop positions.
//!
//! Used by property tests, benchmarks and the `random` command. Every
//! generated state is consistent (one piece per square), has exactly one king
//! per side and never puts a pawn on rank 1 or rank 8.

use rand::Rng;

use crate::game_state::chess_types::*;
use crate::game_state::dead_state::DeadState;

/// Ranks 2 through 7.
const PAWN_SQUARES: Bitboard = 0x00FF_FFFF_FFFF_FF00;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionGeneratorConfig {
    pub max_pawns_per_side: u32,
    pub max_bishops_per_side: u32,
}

impl Default for PositionGeneratorConfig {
    fn default() -> Self {
        Self {
            max_pawns_per_side: 8,
            max_bishops_per_side: 2,
        }
    }
}

pub fn random_state<R: Rng + ?Sized>(rng: &mut R, config: &PositionGeneratorConfig) -> DeadState {
    let mut state = DeadState::new_empty();
    state.side_to_move = if rng.random_bool(0.5) {
        Color::Light
    } else {
        Color::Dark
    };

    for color in [Color::Light, Color::Dark] {
        let occupied = state.occupancy();
        state.kings[color.index()] = random_empty_square(rng, !occupied);
    }

    for color in [Color::Light, Color::Dark] {
        let pawn_count = rng.random_range(0..=config.max_pawns_per_side);
        for _ in 0..pawn_count {
            let free = PAWN_SQUARES & !state.occupancy();
            state.pawns[color.index()] |= random_empty_square(rng, free);
        }

        let bishop_count = rng.random_range(0..=config.max_bishops_per_side);
        for _ in 0..bishop_count {
            let free = !state.occupancy();
            state.bishops[color.index()] |= random_empty_square(rng, free);
        }
    }

    state
}

/// One random bit of `free`, or an empty mask when nothing is free.
fn random_empty_square<R: Rng + ?Sized>(rng: &mut R, free: Bitboard) -> Bitboard {
    let count = free.count_ones();
    if count == 0 {
        return 0;
    }

    let mut pick = rng.random_range(0..count);
    let mut remaining = free;
    loop {
        let bit = remaining & remaining.wrapping_neg();
        if pick == 0 {
            return bit;
        }
        pick -= 1;
        remaining &= !bit;
    }
}
