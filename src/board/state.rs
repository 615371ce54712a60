#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceType, Position};

/// Back-rank order from the a-file to the h-file, shared by both colors.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid holding at most one piece per cell.
///
/// Equality and hashing are structural over all 64 cells, so two boards
/// that hold the same pieces on the same squares are interchangeable as
/// map keys regardless of how they were populated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    // cells[rank - 1][file - 1]
    pub(crate) cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// A board set up in the standard starting layout.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.reset_to_standard_layout();
        board
    }

    /// Put `piece` on `position`, replacing whatever was there.
    pub fn place(&mut self, position: Position, piece: Piece) {
        self.cells[position.rank() as usize - 1][position.file() as usize - 1] = Some(piece);
    }

    /// Remove and return the piece on `position`, if any.
    pub fn clear(&mut self, position: Position) -> Option<Piece> {
        self.cells[position.rank() as usize - 1][position.file() as usize - 1].take()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.cells[position.rank() as usize - 1][position.file() as usize - 1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// Overwrite all 64 cells with the standard starting layout.
    ///
    /// White occupies ranks 1-2, Black ranks 7-8, and ranks 3-6 are cleared.
    pub fn reset_to_standard_layout(&mut self) {
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            self.cells[0][file] = Some(Piece::new(Color::White, kind));
            self.cells[1][file] = Some(Piece::new(Color::White, PieceType::Pawn));
            self.cells[6][file] = Some(Piece::new(Color::Black, PieceType::Pawn));
            self.cells[7][file] = Some(Piece::new(Color::Black, kind));
        }
        for rank in &mut self.cells[2..6] {
            *rank = [None; 8];
        }

        #[cfg(feature = "logging")]
        log::debug!("board reset to standard layout");
    }

    /// Occupied cells as `(position, piece)`, in index order a1, b1, ..., h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Occupied cells holding a piece of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
