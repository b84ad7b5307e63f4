//! Move legality and check detection.
//!
//! A move is legal when the origin holds a piece of the side being checked,
//! the piece's movement rule admits the destination, and the mover's own
//! king is not attacked afterwards. Check detection uses attack geometry
//! only: an attacker's own pins do not stop it from giving check.

use crate::game_state::chess_rules::RuleSet;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{pawn_attacks, pawn_move_allowed, piece_reaches};

/// Movement rules without the self-check constraint.
pub fn is_pseudo_legal(board: &Board, mv: Move, rules: &RuleSet) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };
    if mv.from == mv.to {
        return false;
    }

    if let Some(target) = board.piece_at(mv.to) {
        if target.color == piece.color
            && (rules.forbid_own_capture || target.kind == PieceKind::King)
        {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_allowed(board, mv, piece.color, rules.pawn_rule),
        kind => piece_reaches(board, kind, mv, rules),
    }
}

/// Full legality for `side`: ownership, movement rules, and self-check.
pub fn is_legal(board: &Board, mv: Move, side: Color, rules: &RuleSet) -> bool {
    match board.piece_at(mv.from) {
        Some(piece) if piece.color == side => {}
        _ => return false,
    }
    if !is_pseudo_legal(board, mv, rules) {
        return false;
    }

    let next = board.after_move(mv);
    !is_in_check(&next, side, rules)
}

/// Whether the piece on `from` attacks `target`, whatever stands there.
pub fn attacks_square(board: &Board, from: Square, target: Square, rules: &RuleSet) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if from == target {
        return false;
    }
    let mv = Move::new(from, target);
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(mv, piece.color, rules.pawn_rule),
        kind => piece_reaches(board, kind, mv, rules),
    }
}

pub fn is_square_attacked(board: &Board, square: Square, attacker: Color, rules: &RuleSet) -> bool {
    board
        .pieces(attacker)
        .any(|(from, _)| attacks_square(board, from, square, rules))
}

/// True when some opposing piece can move onto `side`'s king. A board
/// without that king is never in check.
pub fn is_in_check(board: &Board, side: Color, rules: &RuleSet) -> bool {
    board
        .king_square(side)
        .is_some_and(|king| is_square_attacked(board, king, side.opposite(), rules))
}

/// Opposing pieces that currently attack `side`'s king.
pub fn checkers(board: &Board, side: Color, rules: &RuleSet) -> Vec<Square> {
    let Some(king) = board.king_square(side) else {
        return Vec::new();
    };
    board
        .pieces(side.opposite())
        .filter(|(from, _)| attacks_square(board, *from, king, rules))
        .map(|(from, _)| from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(name).expect("test square should parse")
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from), sq(to))
    }

    #[test]
    fn opening_moves_are_legal_for_owner_only() {
        let board = Board::initial();
        let rules = RuleSet::standard();
        assert!(is_legal(&board, mv("e2", "e4"), Color::White, &rules));
        assert!(is_legal(&board, mv("g1", "f3"), Color::White, &rules));
        assert!(!is_legal(&board, mv("e2", "e4"), Color::Black, &rules));
        assert!(!is_legal(&board, mv("e3", "e4"), Color::White, &rules));
        assert!(!is_legal(&board, mv("e2", "e2"), Color::White, &rules));
    }

    #[test]
    fn own_capture_depends_on_rules() {
        let board = Board::initial();
        // d1 queen onto d2 pawn: geometry fine, own piece on target.
        assert!(!is_legal(&board, mv("d1", "d2"), Color::White, &RuleSet::standard()));
        assert!(is_legal(&board, mv("d1", "d2"), Color::White, &RuleSet::faithful()));
        // Never onto one's own king.
        assert!(!is_legal(&board, mv("d1", "e1"), Color::White, &RuleSet::faithful()));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        let board = Board::from_rows(&[
            "    k   ", "        ", "    r   ", "        ", "        ", "        ", "    B   ",
            "    K   ",
        ])
        .expect("board should parse");
        let rules = RuleSet::standard();
        assert!(!is_legal(&board, mv("e2", "d3"), Color::White, &rules));
        assert!(is_legal(&board, mv("e1", "d1"), Color::White, &rules));
    }

    #[test]
    fn check_detection_sees_sliders_and_knights() {
        let rules = RuleSet::standard();
        let rook_check = Board::from_rows(&[
            "    k   ", "        ", "        ", "        ", "        ", "        ", "        ",
            "r   K   ",
        ])
        .expect("board should parse");
        assert!(is_in_check(&rook_check, Color::White, &rules));
        assert!(!is_in_check(&rook_check, Color::Black, &rules));
        assert_eq!(checkers(&rook_check, Color::White, &rules), vec![sq("a1")]);

        let blocked = Board::from_rows(&[
            "    k   ", "        ", "        ", "        ", "        ", "        ", "        ",
            "r B K   ",
        ])
        .expect("board should parse");
        assert!(!is_in_check(&blocked, Color::White, &rules));
        // Without obstruction the rook reaches through the bishop.
        assert!(is_in_check(&blocked, Color::White, &RuleSet::faithful()));

        let knight_check = Board::from_rows(&[
            "    k   ", "        ", "     N  ", "        ", "        ", "        ", "        ",
            "    K   ",
        ])
        .expect("board should parse");
        assert!(is_in_check(&knight_check, Color::Black, &rules));
    }

    #[test]
    fn pawn_attacks_diagonally_in_standard_rules() {
        let board = Board::from_rows(&[
            "        ", "        ", "        ", "    k   ", "   P    ", "        ", "        ",
            "    K   ",
        ])
        .expect("board should parse");
        assert!(is_in_check(&board, Color::Black, &RuleSet::standard()));
        assert!(!is_in_check(&board, Color::Black, &RuleSet::faithful()));
        assert!(is_square_attacked(&board, sq("c5"), Color::White, &RuleSet::standard()));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = Board::empty();
        assert!(!is_in_check(&board, Color::White, &RuleSet::standard()));
        assert!(checkers(&board, Color::White, &RuleSet::standard()).is_empty());
    }
}
