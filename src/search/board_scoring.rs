//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer`. Scores are always from
//! White's point of view: positive favors White, negative favors Black.

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board) -> i32;
}

/// Plain material count, no positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        evaluate(board)
    }
}

/// Signed material sum of every piece on the board.
pub fn evaluate(board: &Board) -> i32 {
    Square::all()
        .filter_map(|sq| board.piece_at(sq))
        .map(|piece| {
            let value = MaterialScorer::piece_value(piece.kind);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}
