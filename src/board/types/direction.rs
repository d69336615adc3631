//! The eight rays radiating from a square.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A ray direction. `Top` points toward rank 0, `Left` toward file 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    /// All directions in index order, clockwise from `Top`
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
        Direction::TopLeft,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::TopRight => 1,
            Direction::Right => 2,
            Direction::BottomRight => 3,
            Direction::Bottom => 4,
            Direction::BottomLeft => 5,
            Direction::Left => 6,
            Direction::TopLeft => 7,
        }
    }

    /// Unit step (rank delta, file delta) along this ray
    #[inline]
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Top => (-1, 0),
            Direction::TopRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (1, 0),
            Direction::BottomLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::TopLeft => (-1, -1),
        }
    }

    /// Returns true for the four rank/file rays
    #[inline]
    #[must_use]
    pub const fn is_straight(self) -> bool {
        matches!(
            self,
            Direction::Top | Direction::Bottom | Direction::Left | Direction::Right
        )
    }

    /// Returns true for the four diagonal rays
    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        !self.is_straight()
    }

    /// Classify the ray from `from` toward `to` by the signs of the deltas.
    ///
    /// Pairs that share no line (knight jumps) land in the diagonal quadrant
    /// matching their signs. Returns `None` only when `from == to`.
    #[must_use]
    pub fn classify(from: Square, to: Square) -> Option<Direction> {
        let d_rank = (to.rank() as isize - from.rank() as isize).signum();
        let d_file = (to.file() as isize - from.file() as isize).signum();
        match (d_rank, d_file) {
            (-1, 0) => Some(Direction::Top),
            (1, 0) => Some(Direction::Bottom),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            (-1, -1) => Some(Direction::TopLeft),
            (-1, 1) => Some(Direction::TopRight),
            (1, -1) => Some(Direction::BottomLeft),
            (1, 1) => Some(Direction::BottomRight),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::TopRight => "topRight",
            Direction::Right => "right",
            Direction::BottomRight => "bottomRight",
            Direction::Bottom => "bottom",
            Direction::BottomLeft => "bottomLeft",
            Direction::Left => "left",
            Direction::TopLeft => "topLeft",
        };
        f.write_str(name)
    }
}
