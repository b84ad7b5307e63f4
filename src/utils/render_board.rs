//! Fixed-width text rendering of the board for the console.

use crate::game_state::chess_types::*;

const FILE_LABELS: &str = "   a b c d e f g h";

/// Render the board with file letters above and below and rank numbers
/// 8 down to 1 on both sides. Empty squares are spaces.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in 0..8u8 {
        let rank = 8 - row;
        out.push_str(&format!("{rank}  "));
        for col in 0..8u8 {
            let ch = board
                .piece_at(Square::new(row, col))
                .map_or(' ', Piece::to_char);
            out.push(ch);
            out.push(' ');
        }
        out.push_str(&format!("{rank}\n"));
    }

    out.push_str(FILE_LABELS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_renders_ranks_top_down() {
        let text = render_board(&Board::initial());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "   a b c d e f g h");
        assert_eq!(lines[1], "8  r n b q k b n r 8");
        assert_eq!(lines[4], "5                  5");
        assert_eq!(lines[8], "1  R N B Q K B N R 1");
        assert_eq!(lines[9], lines[0]);
    }
}
