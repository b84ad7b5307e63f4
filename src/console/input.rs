//! Parsing of the player's console input.

use crate::errors::InputError;
use crate::game_state::chess_types::{Move, PieceKind};
use crate::utils::algebraic::algebraic_to_square;

/// Parse two whitespace-separated squares, e.g. `e2 e4`.
pub fn parse_move_input(line: &str) -> Result<Move, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongTokenCount(tokens.len()));
    }
    let from = algebraic_to_square(tokens[0])?;
    let to = algebraic_to_square(tokens[1])?;
    Ok(Move::new(from, to))
}

/// Parse a single promotion letter: `Q`, `R`, `B` or `N`, any case.
pub fn parse_promotion_input(line: &str) -> Result<PieceKind, InputError> {
    let trimmed = line.trim();
    let invalid = || InputError::InvalidPromotionPiece(trimmed.to_owned());

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => PieceKind::from_letter(letter)
            .filter(|kind| kind.is_promotion_target())
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}
