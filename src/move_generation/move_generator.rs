use crate::game_state::chess_types::*;

/// Source of legal moves for search and the game loop.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, board: &Board, side: Color) -> Vec<Move>;
}
