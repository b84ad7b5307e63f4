//! Interactive console game between a human and the computer.
//!
//! The session is generic over its reader and writer so games can be
//! scripted in tests. Each iteration prints the board, checks for a
//! terminal state, and hands the turn to the human or the engine.

use std::io::{BufRead, Write};

use clap::ValueEnum;
use log::{info, warn};

use crate::console::input::{parse_move_input, parse_promotion_input};
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::SessionError;
use crate::game_state::chess_rules::{RuleSet, DEFAULT_SEARCH_DEPTH};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::{GameState, GameStatus};
use crate::utils::pgn::write_game_record;
use crate::utils::render_board::render_board;

const HUMAN_NAME: &str = "Human";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Fixed-depth alpha-beta over material.
    Minimax,
    /// Uniformly random legal moves.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub human: Color,
    pub rules: RuleSet,
    pub depth: u8,
    pub engine: EngineKind,
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human: Color::White,
            rules: RuleSet::standard(),
            depth: DEFAULT_SEARCH_DEPTH,
            engine: EngineKind::Minimax,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn build_engine(&self) -> Box<dyn Engine> {
        match self.engine {
            EngineKind::Minimax => Box::new(MinimaxEngine::new(self.depth, self.rules)),
            EngineKind::Random => Box::new(RandomEngine::new(self.rules, self.seed)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Finished(GameStatus),
    /// The player quit or input ended before the game did.
    Aborted,
}

enum TurnResult {
    Played,
    Quit,
}

pub struct ConsoleSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    game: GameState,
    engine: Box<dyn Engine>,
    human: Color,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(config: &SessionConfig, input: R, output: W) -> Self {
        Self::with_game(
            GameState::new_game(config.rules),
            config.build_engine(),
            config.human,
            input,
            output,
        )
    }

    /// Start from an arbitrary game state, e.g. a set-up position.
    pub fn with_game(
        game: GameState,
        engine: Box<dyn Engine>,
        human: Color,
        input: R,
        output: W,
    ) -> Self {
        Self {
            input,
            output,
            game,
            engine,
            human,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        info!(
            "new session: human plays {}, opponent {}",
            self.human,
            self.engine.name()
        );

        loop {
            writeln!(self.output, "{}", render_board(self.game.board()))?;

            let status = self.game.status();
            match status {
                GameStatus::Ongoing { in_check: true } => writeln!(self.output, "Check!")?,
                GameStatus::Ongoing { in_check: false } => {}
                terminal => {
                    writeln!(self.output, "{}", self.status_message(terminal))?;
                    self.print_record(Some(terminal))?;
                    info!("game over after {} plies: {terminal:?}", self.game.ply());
                    return Ok(SessionOutcome::Finished(terminal));
                }
            }

            if self.game.side_to_move() == self.human {
                if let TurnResult::Quit = self.human_turn()? {
                    writeln!(self.output, "Game abandoned.")?;
                    self.print_record(None)?;
                    return Ok(SessionOutcome::Aborted);
                }
            } else {
                self.computer_turn()?;
            }
        }
    }

    fn human_turn(&mut self) -> Result<TurnResult, SessionError> {
        loop {
            write!(self.output, "Enter your move (e.g., 'e2 e4'): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(TurnResult::Quit);
            };
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("resign") {
                return Ok(TurnResult::Quit);
            }

            let mv = match parse_move_input(trimmed) {
                Ok(mv) => mv,
                Err(err) => {
                    warn!("rejected input {trimmed:?}: {err}");
                    writeln!(self.output, "Invalid input: {err}. Try again.")?;
                    continue;
                }
            };

            if let Err(err) = self.game.validate_move(mv) {
                warn!("rejected move {mv}: {err}");
                writeln!(self.output, "Invalid move: {err}. Try again.")?;
                continue;
            }

            let promotion = if self.game.needs_promotion(mv) {
                match self.read_promotion()? {
                    Some(kind) => Some(kind),
                    None => return Ok(TurnResult::Quit),
                }
            } else {
                None
            };

            match self.game.play_move(mv, promotion) {
                Ok(_) => return Ok(TurnResult::Played),
                Err(err) => {
                    writeln!(self.output, "Invalid move: {err}. Try again.")?;
                }
            }
        }
    }

    fn read_promotion(&mut self) -> Result<Option<PieceKind>, SessionError> {
        loop {
            write!(self.output, "Choose a piece to promote to (Q, R, B, N): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_promotion_input(&line) {
                Ok(kind) => return Ok(Some(kind)),
                Err(err) => writeln!(self.output, "Invalid promotion: {err}. Try again.")?,
            }
        }
    }

    fn computer_turn(&mut self) -> Result<(), SessionError> {
        let played = self.game.play_engine_move(self.engine.as_mut())?;
        writeln!(
            self.output,
            "Computer's move: {} {}",
            played.mv.from, played.mv.to
        )?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn status_message(&self, status: GameStatus) -> String {
        match status {
            GameStatus::Checkmate { winner } if winner == self.human => {
                format!("Checkmate! {winner} wins. You win.")
            }
            GameStatus::Checkmate { winner } => {
                format!("Checkmate! {winner} wins. The computer wins.")
            }
            GameStatus::Stalemate => "Stalemate! It's a draw.".to_owned(),
            GameStatus::DrawByFiftyMove => "Draw by the fifty-move rule.".to_owned(),
            GameStatus::Ongoing { .. } => String::new(),
        }
    }

    fn print_record(&mut self, status: Option<GameStatus>) -> Result<(), SessionError> {
        let engine_name = self.engine.name().to_owned();
        let (white, black) = match self.human {
            Color::White => (HUMAN_NAME, engine_name.as_str()),
            Color::Black => (engine_name.as_str(), HUMAN_NAME),
        };
        let record = write_game_record(self.game.history(), white, black, status);
        writeln!(self.output)?;
        write!(self.output, "{record}")?;
        Ok(())
    }
}
