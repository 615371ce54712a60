//! Error types for board and move generation operations.

use std::fmt;

use super::types::Position;

/// Error type for out-of-range or malformed coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Rank out of bounds (must be 1-8)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 1-8)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::RankOutOfBounds { rank } => {
                write!(f, "Invalid position: rank {rank} out of bounds (must be 1-8)")
            }
            PositionError::FileOutOfBounds { file } => {
                write!(f, "Invalid position: file {file} out of bounds (must be 1-8)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for move generation precondition failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenError {
    /// Moves were requested for a square holding no piece
    EmptySquare { position: Position },
}

impl fmt::Display for MoveGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenError::EmptySquare { position } => {
                write!(f, "No piece on {position} to generate moves for")
            }
        }
    }
}

impl std::error::Error for MoveGenError {}

/// Error type for piece-placement text (FEN board field) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Too many files in a rank
    TooManyFiles { rank: u8, files: usize },
    /// Too few files in a rank
    TooFewFiles { rank: u8, files: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            PlacementError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
