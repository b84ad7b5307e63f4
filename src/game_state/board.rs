//! 8x8 mailbox board.
//!
//! The board is plain data: a grid of optional pieces with lookup and
//! relocation helpers. It is `Copy`, so search branches and legality probes
//! work on private copies without sharing state.

use crate::game_state::chess_rules::STARTING_POSITION_ROWS;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn initial() -> Self {
        // The constant rows are well formed; an invalid letter would just leave a gap.
        Self::from_rows(&STARTING_POSITION_ROWS).unwrap_or_else(|_| Self::empty())
    }

    /// Build a board from eight rows of eight characters, rank 8 first.
    /// Piece letters follow the `PNBRQK`/`pnbrqk` convention; `' '` and `'.'`
    /// are empty squares.
    pub fn from_rows(rows: &[&str]) -> Result<Self, String> {
        if rows.len() != 8 {
            return Err(format!("expected 8 rows, got {}", rows.len()));
        }

        let mut board = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != 8 {
                return Err(format!(
                    "row {row} must have 8 squares, got {}",
                    chars.len()
                ));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                if ch == ' ' || ch == '.' {
                    continue;
                }
                let piece =
                    Piece::from_char(ch).ok_or_else(|| format!("invalid piece letter '{ch}'"))?;
                board.squares[row][col] = Some(piece);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Relocate the origin piece to the destination and clear the origin.
    /// Returns whatever stood on the destination before.
    pub fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.piece_at(mv.from);
        let captured = self.piece_at(mv.to);
        self.set_piece(mv.to, moving);
        self.set_piece(mv.from, None);
        captured
    }

    /// Copy of the board with `mv` applied.
    #[inline]
    pub fn after_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    /// Replace the piece on `square` with `kind`, keeping its color.
    pub fn promote(&mut self, square: Square, kind: PieceKind) {
        if let Some(piece) = self.piece_at(square) {
            self.set_piece(square, Some(Piece::new(piece.color, kind)));
        }
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|sq| self.piece_at(*sq) == Some(king))
    }

    /// Occupied squares of one color, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Eight rows of piece letters, rank 8 first, blanks as spaces.
    pub fn to_rows(&self) -> Vec<String> {
        self.squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|sq| sq.map_or(' ', Piece::to_char))
                    .collect::<String>()
            })
            .collect()
    }
}
