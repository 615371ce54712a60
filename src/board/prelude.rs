//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_moves::board::prelude::*;
//! ```

pub use super::{
    generate_moves, Board, BoardBuilder, Color, Move, MoveGenError, MoveList, Piece, PieceType,
    PlacementError, Position, PositionError,
};
