//! Conversions between algebraic coordinates (`e4`) and board squares.
//!
//! Row 0 holds rank 8, so rank `r` maps to row `8 - r`.

use crate::errors::InputError;
use crate::game_state::chess_types::{Move, Square};

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, InputError> {
    let chars: Vec<char> = square.chars().collect();
    if chars.len() != 2 {
        return Err(InputError::InvalidSquare(square.to_owned()));
    }

    let file = chars[0].to_ascii_lowercase();
    let rank = chars[1];

    if !('a'..='h').contains(&file) {
        return Err(InputError::InvalidFile(chars[0]));
    }
    if !('1'..='8').contains(&rank) {
        return Err(InputError::InvalidRank(rank));
    }

    let col = file as u8 - b'a';
    let row = b'8' - rank as u8;
    Ok(Square::new(row, col))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Parse a compact long-algebraic move such as "e2e4".
pub fn long_algebraic_to_move(text: &str) -> Result<Move, InputError> {
    let text = text.trim();
    if !text.is_ascii() || text.len() != 4 {
        return Err(InputError::InvalidSquare(text.to_owned()));
    }
    let from = algebraic_to_square(&text[..2])?;
    let to = algebraic_to_square(&text[2..])?;
    Ok(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_expected_rows() {
        assert_eq!(algebraic_to_square("a1"), Ok(Square::new(7, 0)));
        assert_eq!(algebraic_to_square("h8"), Ok(Square::new(0, 7)));
        assert_eq!(algebraic_to_square("E2"), Ok(Square::new(6, 4)));
        assert_eq!(square_to_algebraic(Square::new(4, 4)), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert_eq!(algebraic_to_square("i1"), Err(InputError::InvalidFile('i')));
        assert_eq!(algebraic_to_square("a9"), Err(InputError::InvalidRank('9')));
        assert_eq!(algebraic_to_square("a0"), Err(InputError::InvalidRank('0')));
        assert_eq!(
            algebraic_to_square("e10"),
            Err(InputError::InvalidSquare("e10".to_owned()))
        );
        assert!(algebraic_to_square("").is_err());
    }

    #[test]
    fn long_algebraic_moves_parse() {
        let mv = long_algebraic_to_move("g1f3").expect("g1f3 should parse");
        assert_eq!(mv.to_string(), "g1f3");
        assert!(long_algebraic_to_move("g1f").is_err());
    }
}
