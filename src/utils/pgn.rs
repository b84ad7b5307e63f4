//! PGN-style game record for the end-of-game summary.
//!
//! The record uses numbered long-algebraic movetext (`1. e2e4 e7e5`) with a
//! `q/r/b/n` suffix for promotions. It is printed, never saved.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::{GameStatus, PlayedMove};

/// PGN result token for a finished or abandoned game.
pub fn result_token(status: Option<GameStatus>) -> &'static str {
    match status {
        Some(GameStatus::Checkmate {
            winner: Color::White,
        }) => "1-0",
        Some(GameStatus::Checkmate {
            winner: Color::Black,
        }) => "0-1",
        Some(GameStatus::Stalemate) | Some(GameStatus::DrawByFiftyMove) => "1/2-1/2",
        Some(GameStatus::Ongoing { .. }) | None => "*",
    }
}

pub fn move_to_long_algebraic(played: &PlayedMove) -> String {
    let mut text = played.mv.to_string();
    if let Some(kind) = played.promotion {
        text.push(promotion_suffix(kind));
    }
    text
}

fn promotion_suffix(kind: PieceKind) -> char {
    kind.letter().to_ascii_lowercase()
}

/// Render headers and movetext. The first move in `history` is taken as
/// White's when `history[0].side` is White, otherwise numbering starts with
/// `1...`.
pub fn write_game_record(
    history: &[PlayedMove],
    white: &str,
    black: &str,
    status: Option<GameStatus>,
) -> String {
    let result = result_token(status);

    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Plum Duel Game".to_owned());
    headers.insert("Site", "Local".to_owned());
    headers.insert("Date", Local::now().format("%Y.%m.%d").to_string());
    headers.insert("White", white.to_owned());
    headers.insert("Black", black.to_owned());
    headers.insert("Result", result.to_owned());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut parts = Vec::<String>::with_capacity(history.len() + 1);
    let black_first = history.first().is_some_and(|p| p.side == Color::Black);
    for (idx, played) in history.iter().enumerate() {
        let ply = if black_first { idx + 1 } else { idx };
        let lan = move_to_long_algebraic(played);
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", ply / 2 + 1, lan));
        } else if idx == 0 {
            parts.push(format!("{}... {}", ply / 2 + 1, lan));
        } else {
            parts.push(lan);
        }
    }
    parts.push(result.to_owned());
    out.push_str(&parts.join(" "));
    out.push('\n');
    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
