//! Canonical chess-rule constants and the configurable rule set.
//!
//! The legality checker runs in one of two modes. `standard` plays ordinary
//! chess minus en passant; `faithful` keeps the permissive legacy movement
//! rules (orthogonal one-step pawns, sliders that jump along their lines,
//! self-captures).

/// Standard starting position, row 0 (rank 8) first.
pub const STARTING_POSITION_ROWS: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "        ", "        ", "        ", "        ", "PPPPPPPP", "RNBQKBNR",
];

/// Plies without a pawn move or capture before the game is drawn.
pub const FIFTY_MOVE_PLY_LIMIT: u16 = 50;

/// Search depth used by the computer opponent unless configured otherwise.
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

/// Column of the king on its home row.
pub const KING_START_COL: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnRule {
    /// Single push, double push from the start row, diagonal captures.
    Standard,
    /// One orthogonal step that is not backward; no capture distinction.
    SingleStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub pawn_rule: PawnRule,
    /// Reject rook/bishop/queen moves off their lines or through pieces.
    pub sliding_obstruction: bool,
    /// Reject moves onto a piece of the mover's own color.
    pub forbid_own_capture: bool,
    /// Require empty and unattacked transit squares for castling.
    pub strict_castling: bool,
}

impl RuleSet {
    pub const fn standard() -> Self {
        Self {
            pawn_rule: PawnRule::Standard,
            sliding_obstruction: true,
            forbid_own_capture: true,
            strict_castling: true,
        }
    }

    pub const fn faithful() -> Self {
        Self {
            pawn_rule: PawnRule::SingleStep,
            sliding_obstruction: false,
            forbid_own_capture: false,
            strict_castling: false,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
