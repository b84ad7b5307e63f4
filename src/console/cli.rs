//! Command-line options for the console game.

use clap::{Parser, ValueEnum};

use crate::console::session::{EngineKind, SessionConfig};
use crate::game_state::chess_rules::{RuleSet, DEFAULT_SEARCH_DEPTH};
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideChoice {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RulesChoice {
    /// Ordinary chess movement (no en passant).
    Standard,
    /// Permissive legacy movement: one-step pawns, unobstructed sliders.
    Faithful,
}

#[derive(Debug, Parser)]
#[command(
    name = "plum_duel",
    version,
    about = "Play chess in the terminal against a fixed-depth minimax opponent"
)]
pub struct Cli {
    /// Search depth in plies for the minimax opponent.
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub depth: u8,

    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    pub engine: EngineKind,

    /// Seed for the random opponent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color you play; the computer takes the other side.
    #[arg(long, value_enum, default_value_t = SideChoice::White)]
    pub play_as: SideChoice,

    #[arg(long, value_enum, default_value_t = RulesChoice::Standard)]
    pub rules: RulesChoice,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            human: match self.play_as {
                SideChoice::White => Color::White,
                SideChoice::Black => Color::Black,
            },
            rules: match self.rules {
                RulesChoice::Standard => RuleSet::standard(),
                RulesChoice::Faithful => RuleSet::faithful(),
            },
            depth: self.depth,
            engine: self.engine,
            seed: self.seed,
        }
    }
}
