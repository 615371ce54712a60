//! Chess board representation and pseudo-legal move generation.
//!
//! A fixed 8x8 grid of optional pieces, addressed by 1-indexed
//! [`Position`]s, plus per-piece move generation that respects movement
//! rules and occupancy but not king safety. Turn order, check, castling,
//! en passant and applying moves belong to the caller.
//!
//! # Example
//! ```
//! use chess_moves::board::{Board, Position};
//!
//! let board = Board::standard();
//! let knight: Position = "g1".parse().unwrap();
//! let moves = board.generate_moves(knight).unwrap();
//! println!("Knight on g1 has {} moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveGenError, PlacementError, PositionError};
pub use movegen::generate_moves;
pub use state::Board;
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, PieceType, Position};
