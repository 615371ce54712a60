//! Pseudo-legal move generation.
//!
//! Moves follow each piece's movement rules and the current occupancy only;
//! whether a move leaves the mover's king attacked is left to the caller.

mod pawns;
mod sliders;
mod steppers;

use super::error::MoveGenError;
use super::{Board, Color, Move, MoveList, Piece, PieceType, Position};

use sliders::SliderType;

/// What a piece finds on a square it could move to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Landing {
    Empty,
    Capture,
    Blocked,
}

/// Generate every pseudo-legal move for the piece on `position`.
///
/// Free-function form of [`Board::generate_moves`].
pub fn generate_moves(board: &Board, position: Position) -> Result<MoveList, MoveGenError> {
    board.generate_moves(position)
}

impl Board {
    /// Generate every pseudo-legal move for the piece on `position`.
    ///
    /// Returns [`MoveGenError::EmptySquare`] when there is no piece there.
    /// The list holds no duplicates and may be empty.
    pub fn generate_moves(&self, position: Position) -> Result<MoveList, MoveGenError> {
        let piece = self
            .piece_at(position)
            .ok_or(MoveGenError::EmptySquare { position })?;
        let moves = self.generate_piece_moves(position, piece);

        #[cfg(feature = "logging")]
        log::trace!(
            "{} {} on {position}: {} pseudo-legal moves",
            piece.color(),
            piece.kind(),
            moves.len()
        );

        Ok(moves)
    }

    /// Pseudo-legal moves of every piece of `color`.
    ///
    /// Boards need not be reachable positions, so the total is unbounded by
    /// any single list's capacity; the moves are collected into a `Vec`.
    #[must_use]
    pub fn generate_moves_for_color(&self, color: Color) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|(from, piece)| self.generate_piece_moves(from, piece))
            .collect()
    }

    fn generate_piece_moves(&self, from: Position, piece: Piece) -> MoveList {
        let color = piece.color();
        match piece.kind() {
            PieceType::King => self.generate_king_moves(from, color),
            PieceType::Knight => self.generate_knight_moves(from, color),
            PieceType::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop),
            PieceType::Rook => self.generate_slider_moves(from, color, SliderType::Rook),
            PieceType::Queen => self.generate_slider_moves(from, color, SliderType::Queen),
            PieceType::Pawn => self.generate_pawn_moves(from, color),
        }
    }

    /// Classify `to` for a piece of color `mover`.
    #[inline]
    pub(crate) fn landing(&self, to: Position, mover: Color) -> Landing {
        match self.piece_at(to) {
            None => Landing::Empty,
            Some(occupant) if occupant.color() != mover => Landing::Capture,
            Some(_) => Landing::Blocked,
        }
    }
}
