//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximizes and Black minimizes the White-relative score. Every
//! explored move is applied to a private copy of the board. Terminal
//! positions are not scored specially: a node whose side has no legal move
//! returns its starting sentinel, and checkmate/stalemate are left to the
//! game loop.

use log::debug;

use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

/// Bound used for the initial alpha/beta window and as the no-move sentinel.
pub const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

#[inline]
const fn starting_score(side: Color) -> i32 {
    match side {
        Color::White => -SCORE_INFINITY,
        Color::Black => SCORE_INFINITY,
    }
}

#[inline]
fn improves(side: Color, score: i32, best: i32) -> bool {
    match side {
        Color::White => score > best,
        Color::Black => score < best,
    }
}

/// Full-window search from `board` for `side`.
pub fn search<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    generator: &G,
    scorer: &S,
    side: Color,
    config: SearchConfig,
) -> SearchResult {
    alpha_beta(
        board,
        generator,
        scorer,
        config.depth,
        side,
        -SCORE_INFINITY,
        SCORE_INFINITY,
    )
}

/// Search and play the best move on `board`. The move is returned rather
/// than left for the caller to recover; `None` means nothing was applied.
pub fn search_and_apply<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    generator: &G,
    scorer: &S,
    side: Color,
    config: SearchConfig,
) -> SearchResult {
    let result = search(board, generator, scorer, side, config);
    if let Some(mv) = result.best_move {
        board.apply_move(mv);
    }
    result
}

pub fn alpha_beta<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    generator: &G,
    scorer: &S,
    depth: u8,
    side: Color,
    alpha: i32,
    beta: i32,
) -> SearchResult {
    let mut nodes = 0u64;
    let (best_score, best_move) =
        alpha_beta_node(board, generator, scorer, depth, side, alpha, beta, &mut nodes);

    debug!(
        "alpha_beta side={side} depth={depth} score={best_score} best={} nodes={nodes}",
        best_move.map_or_else(|| "none".to_owned(), |m| m.to_string())
    );

    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta_node<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    generator: &G,
    scorer: &S,
    depth: u8,
    side: Color,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    if depth == 0 {
        return (scorer.score(board), None);
    }

    let mut best_score = starting_score(side);
    let mut best_move = None;

    for mv in generator.generate_moves(board, side) {
        let child = board.after_move(mv);
        let (score, _) = alpha_beta_node(
            &child,
            generator,
            scorer,
            depth - 1,
            side.opposite(),
            alpha,
            beta,
            nodes,
        );

        // The first move is always kept so a root with moves never passes.
        if best_move.is_none() || improves(side, score, best_score) {
            best_score = score;
            best_move = Some(mv);
        }

        match side {
            Color::White => alpha = alpha.max(score),
            Color::Black => beta = beta.min(score),
        }
        if beta <= alpha {
            break;
        }
    }

    (best_score, best_move)
}

/// Unpruned reference traversal over the same tree and move order.
pub fn minimax<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    generator: &G,
    scorer: &S,
    depth: u8,
    side: Color,
) -> SearchResult {
    let mut nodes = 0u64;
    let (best_score, best_move) = minimax_node(board, generator, scorer, depth, side, &mut nodes);
    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

fn minimax_node<G: MoveGenerator, S: BoardScorer>(
    board: &Board,
    generator: &G,
    scorer: &S,
    depth: u8,
    side: Color,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    if depth == 0 {
        return (scorer.score(board), None);
    }

    let mut best_score = starting_score(side);
    let mut best_move = None;

    for mv in generator.generate_moves(board, side) {
        let child = board.after_move(mv);
        let (score, _) =
            minimax_node(&child, generator, scorer, depth - 1, side.opposite(), nodes);
        if best_move.is_none() || improves(side, score, best_score) {
            best_score = score;
            best_move = Some(mv);
        }
    }

    (best_score, best_move)
}
