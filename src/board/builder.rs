//! Fluent builder for constructing boards.
//!
//! Allows creating boards piece by piece rather than through repeated
//! `place` calls or placement text.
//!
//! # Example
//! ```
//! use chess_moves::board::{BoardBuilder, Color, PieceType};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceType::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceType::King)
//!     .piece("a2".parse().unwrap(), Color::White, PieceType::Pawn)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, Color, Piece, PieceType, Position};

/// A fluent builder for constructing `Board` values.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Create a builder starting from the standard initial layout.
    #[must_use]
    pub fn standard_layout() -> Self {
        BoardBuilder {
            board: Board::standard(),
        }
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, position: Position, color: Color, kind: PieceType) -> Self {
        self.board.place(position, Piece::new(color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, position: Position) -> Self {
        self.board.clear(position);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
