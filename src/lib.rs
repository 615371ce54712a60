pub mod board;

pub use board::{generate_moves, Board, Color, Move, MoveList, Piece, PieceType, Position};
