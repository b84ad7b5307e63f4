//! Random-move engine.
//!
//! Picks uniformly among legal moves. Used for diagnostics and as the
//! lowest-strength opponent; a seed makes its games reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::EngineError;
use crate::game_state::chess_rules::RuleSet;
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(rules: RuleSet, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            move_generator: LegalMoveGenerator::new(rules),
            rng,
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Plum Duel Random"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, EngineError> {
        let legal_moves = self.move_generator.generate_moves(board, side);
        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoLegalMoves(side))?;

        Ok(EngineOutput {
            best_move: Some(picked),
            score: None,
            nodes: legal_moves.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_engines_agree() {
        let board = Board::initial();
        let mut a = RandomEngine::new(RuleSet::standard(), Some(42));
        let mut b = RandomEngine::new(RuleSet::standard(), Some(42));
        for _ in 0..5 {
            let ma = a.choose_move(&board, Color::White).expect("moves exist");
            let mb = b.choose_move(&board, Color::White).expect("moves exist");
            assert_eq!(ma.best_move, mb.best_move);
            assert_eq!(ma.nodes, 20);
        }
    }

    #[test]
    fn picked_move_is_legal() {
        let board = Board::initial();
        let gen = LegalMoveGenerator::default();
        let mut engine = RandomEngine::new(RuleSet::standard(), Some(3));
        let out = engine.choose_move(&board, Color::Black).expect("moves exist");
        let mv = out.best_move.expect("a move was picked");
        assert!(gen.is_legal(&board, mv, Color::Black));
    }
}
