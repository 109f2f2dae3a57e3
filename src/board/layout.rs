//! ASCII board diagrams.
//!
//! Custom scenarios and tests describe positions as 8 lines of 8 characters,
//! top line being the Opponent's back rank (x=7). Uppercase letters are
//! Player pieces, lowercase Opponent pieces, `.` an empty square; spaces
//! within a line are ignored.
//!
//! ```text
//! r n b q k b n r
//! p p p p p p p p
//! . . . . . . . .
//! . . . . . . . .
//! . . . . . . . .
//! . . . . . . . .
//! P P P P P P P P
//! R N B Q K B N R
//! ```

use super::error::LayoutError;
use super::{Board, Piece, Square};

impl Board {
    /// Parse a board from an ASCII diagram.
    pub fn from_layout(text: &str) -> Result<Board, LayoutError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() != 8 {
            return Err(LayoutError::WrongRankCount { found: lines.len() });
        }

        let mut board = Board::empty();
        for (i, line) in lines.iter().enumerate() {
            // Top line of the diagram is the far rank
            let x = 7 - i;
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != 8 {
                return Err(LayoutError::WrongFileCount {
                    rank: x,
                    found: chars.len(),
                });
            }
            for (y, &c) in chars.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                match Piece::from_layout_char(c) {
                    Some(piece) => board.set_piece(Square::at(x, y), piece),
                    None => {
                        return Err(LayoutError::InvalidSquare {
                            rank: x,
                            file: y,
                            found: c,
                        })
                    }
                }
            }
        }
        Ok(board)
    }

    /// Render the board as an ASCII diagram (inverse of [`Board::from_layout`]).
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(8 * 16);
        for x in (0..8).rev() {
            for y in 0..8 {
                if y > 0 {
                    out.push(' ');
                }
                match self.piece_at(Square::at(x, y)) {
                    Some(piece) => out.push(piece.to_layout_char()),
                    None => out.push('.'),
                }
            }
            out.push('\n');
        }
        out
    }
}
