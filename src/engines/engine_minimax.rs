//! Fixed-depth material minimax engine.

use log::info;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::EngineError;
use crate::game_state::chess_rules::RuleSet;
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{search_and_apply, SearchConfig};

pub struct MinimaxEngine {
    config: SearchConfig,
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new(depth: u8, rules: RuleSet) -> Self {
        Self {
            config: SearchConfig { depth: depth.max(1) },
            move_generator: LegalMoveGenerator::new(rules),
            scorer: MaterialScorer,
        }
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth, RuleSet::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Plum Duel Minimax"
    }

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, EngineError> {
        // The game owns the real board; the engine plays on a preview copy.
        let mut preview = *board;
        let result = search_and_apply(
            &mut preview,
            &self.move_generator,
            &self.scorer,
            side,
            self.config,
        );
        let best_move = result.best_move.ok_or(EngineError::NoLegalMoves(side))?;

        info!(
            "minimax_engine side={side} depth={} move={best_move} score={} after={} nodes={}",
            self.config.depth,
            result.best_score,
            self.scorer.score(&preview),
            result.nodes
        );

        Ok(EngineOutput {
            best_move: Some(best_move),
            score: Some(result.best_score),
            nodes: result.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::long_algebraic_to_move;

    #[test]
    fn engine_reports_no_moves_as_error() {
        let board = Board::from_rows(&[
            "k       ", "  Q     ", " K      ", "        ", "        ", "        ", "        ",
            "        ",
        ])
        .expect("board should parse");
        let mut engine = MinimaxEngine::default();
        let err = engine
            .choose_move(&board, Color::Black)
            .expect_err("stalemated side has no move");
        assert_eq!(err, EngineError::NoLegalMoves(Color::Black));
    }

    #[test]
    fn engine_returns_move_without_touching_board() {
        let board = Board::from_rows(&[
            "    k   ", "        ", "        ", "   q    ", "        ", "        ", "        ",
            "   RK   ",
        ])
        .expect("board should parse");
        let before = board;
        let mut engine = MinimaxEngine::new(2, RuleSet::standard());
        let out = engine
            .choose_move(&board, Color::White)
            .expect("white has moves");
        assert_eq!(
            out.best_move,
            Some(long_algebraic_to_move("d1d5").expect("move should parse"))
        );
        assert_eq!(out.score, Some(50));
        assert!(out.nodes > 1);
        assert_eq!(board, before);
    }

    #[test]
    fn depth_is_at_least_one() {
        assert_eq!(MinimaxEngine::new(0, RuleSet::standard()).depth(), 1);
    }
}
