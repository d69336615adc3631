//! Square type and key parsing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (rank, file).
///
/// Rank 0 is Black's back rank and rank 7 is White's, so `Square(6, 4)` is
/// the white e-pawn's starting square. `Display` renders the `"<rank>-<file>"`
/// key used by the move lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Create a square from an index (0-63, row-major from 0-0)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Offset the square by a rank and file delta, staying on the board.
    #[must_use]
    pub fn offset(self, d_rank: isize, d_file: isize) -> Option<Self> {
        let rank = self.0 as isize + d_rank;
        let file = self.1 as isize + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// Chebyshev distance between two squares
    #[inline]
    #[must_use]
    pub fn distance(self, other: Square) -> usize {
        self.0.abs_diff(other.0).max(self.1.abs_diff(other.1))
    }

    /// Algebraic name of the square (e.g. `Square(6, 4)` is "e2")
    #[must_use]
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }

    /// Iterate over all 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses either a `"<rank>-<file>"` key or algebraic notation (`"e2"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        if let Some((rank, file)) = s.split_once('-') {
            let rank: usize = rank.parse().map_err(|_| invalid())?;
            let file: usize = file.parse().map_err(|_| invalid())?;
            return Square::try_from((rank, file));
        }

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let file = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => return Err(invalid()),
        };

        let rank = match chars[1] {
            '1'..='8' => 7 - (chars[1] as usize - '1' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}
