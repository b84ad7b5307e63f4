//! Engine abstraction for the computer opponent.
//!
//! The console session only talks to `Engine`, so strategies can be chosen
//! at startup behind a single interface.

use crate::errors::EngineError;
use crate::game_state::chess_types::{Board, Color, Move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// White-relative score, when the engine computes one.
    pub score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, EngineError>;
}
