//! Core value types shared by the rules engine, search, and console layers.
//!
//! Color is carried explicitly on every piece and threaded through every
//! legality, generation, and search call. Letter case is only consulted when
//! converting to or from text.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this color. White starts on row 6 and
    /// moves toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row a pawn of this color must reach to promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        self.opposite().home_row()
    }

    /// Row holding this color's pawns at the start of the game.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse an upper- or lower-case piece letter, ignoring its case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Pieces a pawn may become on the last rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// A colored piece. Empty squares are `None` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Upper case for White, lower case for Black.
    pub fn to_char(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }
}

/// Board coordinate. Row 0 is rank 8, row 7 is rank 1; column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    /// Offset by a signed delta, or `None` when it leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// An (origin, destination) pair. Capture and promotion facts are read from
/// the board when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn row_delta(self) -> i8 {
        self.to.row as i8 - self.from.row as i8
    }

    #[inline]
    pub fn col_delta(self) -> i8 {
        self.to.col as i8 - self.from.col as i8
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_letters_follow_case_convention() {
        let white_queen = Piece::new(Color::White, PieceKind::Queen);
        let black_knight = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(white_queen.to_char(), 'Q');
        assert_eq!(black_knight.to_char(), 'n');
        assert_eq!(Piece::from_char('n'), Some(black_knight));
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn square_display_maps_row_zero_to_rank_eight() {
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 4).to_string(), "e1");
        assert_eq!(Move::new(Square::new(6, 4), Square::new(4, 4)).to_string(), "e2e4");
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(0, 0).offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::all().count(), 64);
    }
}
