//! Fixed-point reachability closures.
//!
//! Each closure grows a mask by one movement step at a time until nothing new
//! is added. Growth is monotone over 64 bits, so every loop stops after at
//! most 65 rounds.

use crate::game_state::chess_types::{Bitboard, Color};
use crate::game_state::dead_state::DeadState;
use crate::moves::bishop_moves::bishop_steps;
use crate::moves::king_moves::king_steps;
use crate::moves::pawn_moves::{blocked_pawns, pawn_attacks, pawn_pushes};

/// Grow `seed` by `step` until it stops changing. Forbidden squares are cleared
/// from the whole mask each round, the seed included.
#[inline]
pub fn fixed_point<F>(seed: Bitboard, forbidden: Bitboard, step: F) -> Bitboard
where
    F: Fn(Bitboard) -> Bitboard,
{
    let mut reached = seed;
    loop {
        let next = (reached | step(reached)) & !forbidden;
        if next == reached {
            return reached;
        }
        reached = next;
    }
}

/// Every square the pawns of `color` can reach by forward pushes alone.
///
/// Pushes never land on `enemy_blocked`. Squares held by the mover's own pawns
/// further up the file are not excluded.
pub fn pawn_reach(color: Color, pawns: Bitboard, enemy_blocked: Bitboard) -> Bitboard {
    let mut reached = pawns;
    loop {
        let next = reached | (pawn_pushes(color, reached) & !enemy_blocked);
        if next == reached {
            return reached;
        }
        reached = next;
    }
}

/// Connected region of king steps from `kings`, avoiding `forbidden`.
#[inline]
pub fn king_reach(kings: Bitboard, forbidden: Bitboard) -> Bitboard {
    fixed_point(kings, forbidden, king_steps)
}

/// Squares reachable by repeated single diagonal steps, avoiding `forbidden`.
/// Other pieces on the board do not obstruct the walk.
#[inline]
pub fn bishop_reach(bishops: Bitboard, forbidden: Bitboard) -> Bitboard {
    fixed_point(bishops, forbidden, bishop_steps)
}

/// Static blockage masks for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blockage {
    /// Own pawns with an enemy pawn directly ahead.
    pub pawns: Bitboard,
    /// Diagonal attacks of those frozen pawns.
    pub attacks: Bitboard,
}

pub fn blockage(state: &DeadState, color: Color) -> Blockage {
    let pawns = blocked_pawns(color, state.pawns(color), state.pawns(color.opposite()));
    Blockage {
        pawns,
        attacks: pawn_attacks(color, pawns),
    }
}

/// Everything one side's pieces could ever reach under the current blockage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideReach {
    pub pawns: Bitboard,
    pub pawn_attacks: Bitboard,
    pub kings: Bitboard,
    pub bishops: Bitboard,
}

impl SideReach {
    /// Pawn and bishop squares, the material that can be captured.
    #[inline]
    pub const fn minor_material(&self) -> Bitboard {
        self.pawns | self.bishops
    }

    /// Squares where pawns or bishops could eventually capture.
    #[inline]
    pub const fn minor_attacks(&self) -> Bitboard {
        self.pawn_attacks | self.bishops
    }
}

/// Pawn push closures for both sides, indexed by `Color::index()`.
pub fn pawn_reach_both(state: &DeadState, blocked: &[Blockage; 2]) -> [Bitboard; 2] {
    [Color::Light, Color::Dark].map(|color| {
        pawn_reach(
            color,
            state.pawns(color),
            blocked[color.opposite().index()].pawns,
        )
    })
}

/// Complete the per-side reach once the pawn closures are known.
pub fn side_reach(
    state: &DeadState,
    blocked: &[Blockage; 2],
    pawn_moves: &[Bitboard; 2],
) -> [SideReach; 2] {
    [Color::Light, Color::Dark].map(|color| {
        let own = blocked[color.index()];
        let enemy = blocked[color.opposite().index()];
        SideReach {
            pawns: pawn_moves[color.index()],
            pawn_attacks: pawn_attacks(color, pawn_moves[color.index()]),
            kings: king_reach(state.kings(color), enemy.attacks | own.pawns),
            bishops: bishop_reach(state.bishops(color), own.pawns),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::{A1, H8, RANK_8};
    use crate::utils::algebraic::algebraic_to_bitboard;

    fn bb(squares: &[&str]) -> Bitboard {
        squares
            .iter()
            .map(|sq| algebraic_to_bitboard(sq).expect("square should parse"))
            .fold(0, |acc, b| acc | b)
    }

    #[test]
    fn unobstructed_pawn_reaches_its_promotion_rank() {
        let reach = pawn_reach(Color::Light, bb(&["e2"]), 0);
        assert_eq!(reach, bb(&["e2", "e3", "e4", "e5", "e6", "e7", "e8"]));
        assert_ne!(reach & RANK_8, 0);
    }

    #[test]
    fn pawn_closure_stops_below_a_blocked_enemy_pawn() {
        let reach = pawn_reach(Color::Dark, bb(&["d7"]), bb(&["d4"]));
        assert_eq!(reach, bb(&["d7", "d6", "d5"]));
    }

    #[test]
    fn pawn_closure_passes_through_own_pawns() {
        let reach = pawn_reach(Color::Light, bb(&["c2", "c4"]), 0);
        assert_eq!(reach.count_ones(), 7);
    }

    #[test]
    fn lone_king_reaches_the_whole_board() {
        assert_eq!(king_reach(A1, 0), u64::MAX);
    }

    #[test]
    fn king_behind_a_full_rank_wall_stays_on_its_side() {
        let wall = 0x0000_00FF_0000_0000;
        let reach = king_reach(A1, wall);
        assert_eq!(reach, 0x0000_0000_FFFF_FFFF);
    }

    #[test]
    fn bishop_reach_covers_one_square_colour() {
        let reach = bishop_reach(A1, 0);
        assert_eq!(reach.count_ones(), 32);
        assert_ne!(reach & H8, 0);
        assert_eq!(reach & bb(&["b1", "a8"]), 0);
    }

    #[test]
    fn bishop_reach_is_cut_by_forbidden_squares() {
        let reach = bishop_reach(A1, bb(&["b2"]));
        assert_eq!(reach, A1);
    }

    #[test]
    fn fixed_point_drops_a_forbidden_seed() {
        let reach = fixed_point(A1, A1, |_| 0);
        assert_eq!(reach, 0);
    }
}
