//! Brute-force legal move generation.
//!
//! Scans every (origin, destination) pair in row-major order and keeps the
//! pairs the legality checker approves. Output is recomputed on every call.

use crate::game_state::chess_rules::RuleSet;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_in_check, is_legal};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegalMoveGenerator {
    pub rules: RuleSet,
}

impl LegalMoveGenerator {
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    #[inline]
    pub fn is_legal(&self, board: &Board, mv: Move, side: Color) -> bool {
        is_legal(board, mv, side, &self.rules)
    }

    #[inline]
    pub fn is_in_check(&self, board: &Board, side: Color) -> bool {
        is_in_check(board, side, &self.rules)
    }

    /// Stops at the first legal move instead of collecting them all.
    pub fn has_legal_move(&self, board: &Board, side: Color) -> bool {
        board.pieces(side).any(|(from, _)| {
            Square::all().any(|to| self.is_legal(board, Move::new(from, to), side))
        })
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, board: &Board, side: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        // Origins without a piece of `side` can never pass the checker.
        for (from, _) in board.pieces(side) {
            for to in Square::all() {
                let mv = Move::new(from, to);
                if self.is_legal(board, mv, side) {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}
