//! Per-piece movement geometry shared by the legality checker and the
//! attack detector.

use crate::game_state::chess_rules::{PawnRule, RuleSet};
use crate::game_state::chess_types::*;

/// True when every square strictly between the move's endpoints is empty.
/// Only meaningful for moves along a rank, file, or diagonal.
pub fn path_clear(board: &Board, mv: Move) -> bool {
    let step_row = mv.row_delta().signum();
    let step_col = mv.col_delta().signum();
    let mut current = mv.from;
    loop {
        current = match current.offset(step_row, step_col) {
            Some(next) => next,
            None => return false,
        };
        if current == mv.to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

/// Geometry for every piece except pawns, whose pushes and captures differ.
pub fn piece_reaches(board: &Board, kind: PieceKind, mv: Move, rules: &RuleSet) -> bool {
    let dr = mv.row_delta().abs();
    let dc = mv.col_delta().abs();

    let straight = dr == 0 || dc == 0;
    let diagonal = dr == dc;

    let on_line = match kind {
        PieceKind::King => return dr <= 1 && dc <= 1,
        PieceKind::Knight => return dr * dc == 2,
        PieceKind::Pawn => return false,
        PieceKind::Bishop => diagonal,
        PieceKind::Rook => straight,
        PieceKind::Queen => straight || diagonal,
    };
    // Without obstruction a slider still keeps to its lines, it just jumps.
    on_line && (!rules.sliding_obstruction || path_clear(board, mv))
}

/// Whether a pawn of `color` may make `mv` as a move (push or capture).
pub fn pawn_move_allowed(board: &Board, mv: Move, color: Color, rule: PawnRule) -> bool {
    let fwd = color.forward();
    let dr = mv.row_delta();
    let dc = mv.col_delta();

    match rule {
        PawnRule::Standard => {
            if dc == 0 {
                if !board.is_empty(mv.to) {
                    return false;
                }
                if dr == fwd {
                    return true;
                }
                if dr == 2 * fwd && mv.from.row == color.pawn_row() {
                    return mv
                        .from
                        .offset(fwd, 0)
                        .is_some_and(|middle| board.is_empty(middle));
                }
                false
            } else {
                dc.abs() == 1 && dr == fwd && board.color_at(mv.to) == Some(color.opposite())
            }
        }
        PawnRule::SingleStep => single_step_pawn(mv, color),
    }
}

/// Whether a pawn of `color` standing on `mv.from` attacks `mv.to`,
/// regardless of what occupies the target.
pub fn pawn_attacks(mv: Move, color: Color, rule: PawnRule) -> bool {
    match rule {
        PawnRule::Standard => mv.row_delta() == color.forward() && mv.col_delta().abs() == 1,
        PawnRule::SingleStep => single_step_pawn(mv, color),
    }
}

fn single_step_pawn(mv: Move, color: Color) -> bool {
    let dr = mv.row_delta();
    let dc = mv.col_delta();
    // Backward moves are rejected; sideways steps are not.
    if dr * color.forward() < 0 {
        return false;
    }
    dr * dr + dc * dc <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(Square::new(from.0, from.1), Square::new(to.0, to.1))
    }

    #[test]
    fn path_clear_detects_blockers() {
        let board = Board::initial();
        // a1 rook to a5 is blocked by the a2 pawn.
        assert!(!path_clear(&board, mv((7, 0), (3, 0))));
        // a2 pawn to a4 crosses only a3.
        assert!(path_clear(&board, mv((6, 0), (4, 0))));
    }

    #[test]
    fn knight_geometry_is_l_shaped() {
        let board = Board::empty();
        let rules = RuleSet::standard();
        assert!(piece_reaches(&board, PieceKind::Knight, mv((4, 4), (2, 5)), &rules));
        assert!(piece_reaches(&board, PieceKind::Knight, mv((4, 4), (5, 6)), &rules));
        assert!(!piece_reaches(&board, PieceKind::Knight, mv((4, 4), (2, 6)), &rules));
        assert!(!piece_reaches(&board, PieceKind::Knight, mv((4, 4), (4, 6)), &rules));
    }

    #[test]
    fn unobstructed_sliders_jump_but_keep_to_their_lines() {
        let board = Board::initial();
        let faithful = RuleSet::faithful();
        let standard = RuleSet::standard();

        // a1 rook to a5 over the a2 pawn.
        assert!(piece_reaches(&board, PieceKind::Rook, mv((7, 0), (3, 0)), &faithful));
        assert!(!piece_reaches(&board, PieceKind::Rook, mv((7, 0), (3, 0)), &standard));

        // Off-line targets stay out of reach.
        assert!(!piece_reaches(&board, PieceKind::Rook, mv((7, 0), (3, 5)), &faithful));
        assert!(!piece_reaches(&board, PieceKind::Bishop, mv((7, 2), (5, 2)), &faithful));
        assert!(!piece_reaches(&board, PieceKind::Queen, mv((7, 3), (5, 4)), &faithful));

        // c1 bishop to g5 and d1 queen to h5 across their own pawns.
        assert!(piece_reaches(&board, PieceKind::Bishop, mv((7, 2), (3, 6)), &faithful));
        assert!(piece_reaches(&board, PieceKind::Queen, mv((7, 3), (3, 7)), &faithful));
    }

    #[test]
    fn standard_pawn_pushes_and_captures() {
        let mut board = Board::initial();
        let white = Color::White;
        assert!(pawn_move_allowed(&board, mv((6, 4), (5, 4)), white, PawnRule::Standard));
        assert!(pawn_move_allowed(&board, mv((6, 4), (4, 4)), white, PawnRule::Standard));
        assert!(!pawn_move_allowed(&board, mv((6, 4), (3, 4)), white, PawnRule::Standard));
        assert!(!pawn_move_allowed(&board, mv((6, 4), (5, 5)), white, PawnRule::Standard));

        board.set_piece(Square::new(5, 5), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(pawn_move_allowed(&board, mv((6, 4), (5, 5)), white, PawnRule::Standard));
        // A blocked pawn cannot push into the knight.
        assert!(!pawn_move_allowed(&board, mv((6, 5), (5, 5)), white, PawnRule::Standard));
    }

    #[test]
    fn single_step_pawn_allows_sideways_but_not_backward() {
        let board = Board::empty();
        let black = Color::Black;
        assert!(pawn_move_allowed(&board, mv((3, 3), (4, 3)), black, PawnRule::SingleStep));
        assert!(pawn_move_allowed(&board, mv((3, 3), (3, 4)), black, PawnRule::SingleStep));
        assert!(!pawn_move_allowed(&board, mv((3, 3), (2, 3)), black, PawnRule::SingleStep));
        assert!(!pawn_move_allowed(&board, mv((3, 3), (4, 4)), black, PawnRule::SingleStep));
        assert!(!pawn_move_allowed(&board, mv((1, 3), (3, 3)), black, PawnRule::SingleStep));
    }
}
