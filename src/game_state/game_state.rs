//! Authoritative game state and turn state machine.
//!
//! `GameState` owns the board for the whole game. Castling and promotion are
//! handled here as explicit alternate transitions on top of the generic
//! legality checker, which knows nothing about either.

use log::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{EngineError, MoveError};
use crate::game_state::chess_rules::{RuleSet, FIFTY_MOVE_PLY_LIMIT, KING_START_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{checkers, is_square_attacked};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Play continues; `in_check` flags the side to move.
    Ongoing { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
    DrawByFiftyMove,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }
}

/// One entry of the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    pub side: Color,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    /// Rook relocation when the move was a castle.
    pub castling_rook: Option<Move>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    move_history: Vec<PlayedMove>,
    ply: u16,
    fifty_move_counter: u16,
    move_generator: LegalMoveGenerator,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game(RuleSet::default())
    }
}

impl GameState {
    pub fn new_game(rules: RuleSet) -> Self {
        Self::from_board(Board::initial(), Color::White, rules)
    }

    pub fn from_board(board: Board, side_to_move: Color, rules: RuleSet) -> Self {
        Self {
            board,
            side_to_move,
            move_history: Vec::new(),
            ply: 0,
            fifty_move_counter: 0,
            move_generator: LegalMoveGenerator::new(rules),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn history(&self) -> &[PlayedMove] {
        &self.move_history
    }

    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    #[inline]
    pub fn fifty_move_counter(&self) -> u16 {
        self.fifty_move_counter
    }

    #[inline]
    pub fn rules(&self) -> &RuleSet {
        &self.move_generator.rules
    }

    #[inline]
    pub fn move_generator(&self) -> &LegalMoveGenerator {
        &self.move_generator
    }

    #[inline]
    pub fn is_in_check(&self, side: Color) -> bool {
        self.move_generator.is_in_check(&self.board, side)
    }

    /// Terminal-state detection for the side to move: checkmate first, then
    /// stalemate, then the fifty-move rule.
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.is_in_check(side);
        if in_check {
            debug!(
                "{side} in check from {:?}",
                checkers(&self.board, side, self.rules())
            );
        }

        if !self.move_generator.has_legal_move(&self.board, side) {
            return if in_check {
                GameStatus::Checkmate {
                    winner: side.opposite(),
                }
            } else {
                GameStatus::Stalemate
            };
        }

        if self.fifty_move_counter >= FIFTY_MOVE_PLY_LIMIT {
            return GameStatus::DrawByFiftyMove;
        }

        GameStatus::Ongoing { in_check }
    }

    /// Check `mv` for the side to move without playing it. Returns the rook
    /// relocation when the move is a castle.
    pub fn validate_move(&self, mv: Move) -> Result<Option<Move>, MoveError> {
        let side = self.side_to_move;
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare(mv.from))?;
        if piece.color != side {
            return Err(MoveError::NotYourPiece {
                square: mv.from,
                side,
            });
        }

        if let Some(rook_move) = self.castling_rook_move(mv) {
            self.check_castling(mv, rook_move)?;
            return Ok(Some(rook_move));
        }

        if !self.move_generator.is_legal(&self.board, mv, side) {
            return Err(MoveError::Illegal {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(None)
    }

    /// Whether `mv` takes a pawn of the side to move onto its last rank.
    pub fn needs_promotion(&self, mv: Move) -> bool {
        let side = self.side_to_move;
        self.board.piece_at(mv.from) == Some(Piece::new(side, PieceKind::Pawn))
            && mv.to.row == side.promotion_row()
    }

    /// Validate and play `mv` for the side to move. A promoting pawn becomes
    /// `promotion`, or a queen when none is given.
    pub fn play_move(
        &mut self,
        mv: Move,
        promotion: Option<PieceKind>,
    ) -> Result<PlayedMove, MoveError> {
        let castling_rook = self.validate_move(mv)?;
        let side = self.side_to_move;

        let promotion = if self.needs_promotion(mv) {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            if !kind.is_promotion_target() {
                return Err(MoveError::InvalidPromotion);
            }
            Some(kind)
        } else {
            None
        };

        let moving = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare(mv.from))?;

        if let Some(rook_move) = castling_rook {
            self.board.apply_move(rook_move);
        }
        let captured = self.board.apply_move(mv);
        if let Some(kind) = promotion {
            self.board.promote(mv.to, kind);
        }

        self.ply = self.ply.saturating_add(1);
        if moving.kind == PieceKind::Pawn || captured.is_some() {
            self.fifty_move_counter = 0;
        } else {
            self.fifty_move_counter = self.fifty_move_counter.saturating_add(1);
        }

        let played = PlayedMove {
            mv,
            side,
            captured,
            promotion,
            castling_rook,
        };
        self.move_history.push(played);
        self.side_to_move = side.opposite();

        info!(
            "ply={} side={side} move={mv} captured={:?} promotion={:?} fifty_move_counter={}",
            self.ply, captured, promotion, self.fifty_move_counter
        );
        Ok(played)
    }

    /// Ask `engine` for a move for the side to move and play it.
    pub fn play_engine_move(&mut self, engine: &mut dyn Engine) -> Result<PlayedMove, EngineError> {
        let side = self.side_to_move;
        let output = engine.choose_move(&self.board, side)?;
        let mv = output.best_move.ok_or(EngineError::NoLegalMoves(side))?;
        Ok(self.play_move(mv, None)?)
    }

    /// Rook relocation for a king stepping two files from its home square.
    fn castling_rook_move(&self, mv: Move) -> Option<Move> {
        let side = self.side_to_move;
        let home = side.home_row();
        if self.board.piece_at(mv.from) != Some(Piece::new(side, PieceKind::King))
            || mv.from != Square::new(home, KING_START_COL)
            || mv.to.row != home
        {
            return None;
        }
        match mv.to.col {
            6 => Some(Move::new(Square::new(home, 7), Square::new(home, 5))),
            2 => Some(Move::new(Square::new(home, 0), Square::new(home, 3))),
            _ => None,
        }
    }

    fn check_castling(&self, king_move: Move, rook_move: Move) -> Result<(), MoveError> {
        let side = self.side_to_move;
        let refused = MoveError::CastlingNotAllowed {
            from: king_move.from,
            to: king_move.to,
        };

        if self.board.piece_at(rook_move.from) != Some(Piece::new(side, PieceKind::Rook)) {
            return Err(refused);
        }

        if self.rules().strict_castling {
            let home = side.home_row();
            let (lo, hi) = if rook_move.from.col < KING_START_COL {
                (rook_move.from.col + 1, KING_START_COL)
            } else {
                (KING_START_COL + 1, rook_move.from.col)
            };
            if (lo..hi).any(|col| !self.board.is_empty(Square::new(home, col))) {
                return Err(refused);
            }

            let (pass_lo, pass_hi) = if king_move.to.col < KING_START_COL {
                (king_move.to.col, KING_START_COL)
            } else {
                (KING_START_COL, king_move.to.col)
            };
            let attacker = side.opposite();
            if (pass_lo..=pass_hi).any(|col| {
                is_square_attacked(&self.board, Square::new(home, col), attacker, self.rules())
            }) {
                return Err(refused);
            }
        }

        let mut after = self.board;
        after.apply_move(rook_move);
        after.apply_move(king_move);
        if self.move_generator.is_in_check(&after, side) {
            return Err(refused);
        }
        Ok(())
    }
}
