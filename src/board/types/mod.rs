//! Core chess types.
//!
//! This module contains the value types move generation operates on:
//! - `Piece`, `PieceType` and `Color` - colored chess pieces
//! - `Position` - a validated, 1-indexed (rank, file) square
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

// Re-export all public types
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceType};
pub use square::Position;
