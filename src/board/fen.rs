//! Piece-placement text: the board field of a FEN record.
//!
//! Ranks are listed from 8 down to 1 and separated by `/`; digits count
//! empty squares and letters are pieces (uppercase White).

use std::fmt;
use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, Piece, Position};

impl Board {
    /// Render the piece placement, e.g. `8/8/8/8/8/8/8/4K3`.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (1..=8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for piece in self.cells[rank as usize - 1] {
                if let Some(piece) = piece {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    /// Parse a piece placement. Trailing FEN fields after whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let placement = s.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::new();
        for (rank, rank_str) in (1..=8u8).rev().zip(ranks) {
            let mut files = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    files += skip as usize;
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                    files += 1;
                    if files > 8 {
                        return Err(PlacementError::TooManyFiles { rank, files });
                    }
                    let position = Position::from_index((rank as usize - 1) * 8 + files - 1);
                    board.place(position, piece);
                }
                if files > 8 {
                    return Err(PlacementError::TooManyFiles { rank, files });
                }
            }
            if files < 8 {
                return Err(PlacementError::TooFewFiles { rank, files });
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Diagram with rank 8 on top; `.` marks an empty square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1..=8u8).rev() {
            write!(f, "{rank} ")?;
            for cell in self.cells[rank as usize - 1] {
                let c = cell.map_or('.', Piece::to_fen_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, PieceType};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_parse_start_placement() {
        let board: Board = START.parse().unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(Board::standard().to_placement(), START);
    }

    #[test]
    fn test_trailing_fen_fields_ignored() {
        let board: Board = format!("{START} w KQkq - 0 1").parse().unwrap();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_parse_sparse_placement() {
        let board: Board = "8/8/8/3q4/8/8/8/4K3".parse().unwrap();
        assert_eq!(
            board.piece_at("d5".parse().unwrap()),
            Some(Piece::new(Color::Black, PieceType::Queen))
        );
        assert_eq!(
            board.piece_at("e1".parse().unwrap()),
            Some(Piece::new(Color::White, PieceType::King))
        );
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "8/8/8".parse::<Board>(),
            Err(PlacementError::WrongRankCount { found: 3 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/4X3".parse::<Board>(),
            Err(PlacementError::InvalidPiece { char: 'X' })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/4K4".parse::<Board>(),
            Err(PlacementError::TooManyFiles { rank: 1, files: 9 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/4K2".parse::<Board>(),
            Err(PlacementError::TooFewFiles { rank: 1, files: 7 })
        );
    }

    #[test]
    fn test_display_diagram() {
        let board: Board = "8/8/8/8/8/8/8/R3K3".parse().unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 ........");
        assert_eq!(lines[7], "1 R...K...");
        assert_eq!(lines[8], "  abcdefgh");
    }
}
