//! Corner mate patterns.
//!
//! A defending king that can walk into a corner, with its own bishop able to
//! stand on the flank square and the guard square covered by its own pawn (or
//! a second own bishop), can be mated there by a single enemy bishop.

use crate::dead_position::reachability::SideReach;
use crate::game_state::chess_rules::{A1, A2, A7, A8, B1, B8, G1, G8, H1, H2, H7, H8};
use crate::game_state::chess_types::{Bitboard, Color};
use crate::game_state::dead_state::DeadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    A8,
    H8,
    A1,
    H1,
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Corner::A8 => "a8",
            Corner::H8 => "h8",
            Corner::A1 => "a1",
            Corner::H1 => "h1",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerPattern {
    pub corner: Corner,
    pub defender: Color,
    /// The corner square itself.
    pub square: Bitboard,
    /// Square beside the corner on the back rank.
    pub flank: Bitboard,
    /// Square in front of the corner.
    pub guard: Bitboard,
}

/// Checked in this order; the first match is reported.
pub const CORNER_PATTERNS: [CornerPattern; 4] = [
    CornerPattern {
        corner: Corner::A8,
        defender: Color::Dark,
        square: A8,
        flank: B8,
        guard: A7,
    },
    CornerPattern {
        corner: Corner::H8,
        defender: Color::Dark,
        square: H8,
        flank: G8,
        guard: H7,
    },
    CornerPattern {
        corner: Corner::A1,
        defender: Color::Light,
        square: A1,
        flank: B1,
        guard: A2,
    },
    CornerPattern {
        corner: Corner::H1,
        defender: Color::Light,
        square: H1,
        flank: G1,
        guard: H2,
    },
];

impl CornerPattern {
    pub fn matches(&self, state: &DeadState, reach: &[SideReach; 2]) -> bool {
        let attacker = &reach[self.defender.opposite().index()];
        let defender = &reach[self.defender.index()];

        let guard_covered = defender.pawns & self.guard != 0
            || state.bishops(self.defender).count_ones() > 1;

        attacker.bishops & self.square != 0
            && defender.kings & self.square != 0
            && defender.bishops & self.flank != 0
            && guard_covered
    }
}

pub fn find_corner_mate(state: &DeadState, reach: &[SideReach; 2]) -> Option<Corner> {
    CORNER_PATTERNS
        .iter()
        .find(|pattern| pattern.matches(state, reach))
        .map(|pattern| pattern.corner)
}
