//! Crate root module declarations for the Plum Duel console chess game.
//!
//! Exposes the rules engine (board, legality, check detection), the
//! minimax search and engines built on it, the game state machine, and the
//! console session so the binary, tests, and benches share stable paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod pgn;
    pub mod render_board;
}

pub mod console {
    pub mod cli;
    pub mod input;
    pub mod session;
}
