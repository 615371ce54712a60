//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// A square on the board as (rank, file), both 1-indexed in `1..=8`.
///
/// File 1 is the a-file, rank 1 is White's back rank. Fields are private so
/// every `Position` in existence is on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Position {
    rank: u8,
    file: u8,
}

impl Position {
    /// Create a position, rejecting coordinates outside `1..=8`.
    pub fn new(rank: u8, file: u8) -> Result<Self, PositionError> {
        if !(1..=8).contains(&rank) {
            return Err(PositionError::RankOutOfBounds { rank });
        }
        if !(1..=8).contains(&file) {
            return Err(PositionError::FileOutOfBounds { file });
        }
        Ok(Position { rank, file })
    }

    /// Rank, 1 to 8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// File, 1 to 8 (1 = a-file)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Step by (rank delta, file delta), or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Position> {
        let rank = self.rank as i16 + d_rank as i16;
        let file = self.file as i16 + d_file as i16;
        if rank < 1 || rank > 8 || file < 1 || file > 8 {
            None
        } else {
            Some(Position {
                rank: rank as u8,
                file: file as u8,
            })
        }
    }

    /// Index into a 64-cell array (a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    /// Inverse of [`Position::as_index`]; `idx` must be below 64.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Position {
            rank: (idx / 8) as u8 + 1,
            file: (idx % 8) as u8 + 1,
        }
    }

    /// All 64 positions in index order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file - 1 + b'a') as char, self.rank)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        Position::new(rank, file)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.rank, pos.file)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a' + 1,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'0',
            _ => return Err(invalid()),
        };

        Ok(Position { rank, file })
    }
}
