//! Per-direction move lists.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::square::Square;

/// Destination squares of a figure, bucketed by the ray they lie on.
///
/// All eight directions are always present. Within a direction the squares
/// are ordered nearest-first from the figure that owns the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Moves {
    rays: [Vec<Square>; 8],
}

impl Moves {
    /// Create an empty move map
    #[must_use]
    pub fn new() -> Self {
        Moves::default()
    }

    pub(crate) fn push(&mut self, dir: Direction, sq: Square) {
        self.rays[dir.index()].push(sq);
    }

    /// Squares on one ray
    #[inline]
    #[must_use]
    pub fn get(&self, dir: Direction) -> &[Square] {
        &self.rays[dir.index()]
    }

    /// Returns true if any ray holds `sq`
    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.rays.iter().any(|ray| ray.contains(&sq))
    }

    /// The ray holding `sq`, if any
    #[must_use]
    pub fn direction_of(&self, sq: Square) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.rays[dir.index()].contains(&sq))
    }

    /// Total number of squares across all rays
    #[must_use]
    pub fn len(&self) -> usize {
        self.rays.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rays.iter().all(Vec::is_empty)
    }

    /// Iterate over `(direction, squares)` pairs in `Direction::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &[Square])> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |dir| (dir, self.rays[dir.index()].as_slice()))
    }

    /// Iterate over every square, ray by ray
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rays.iter().flatten().copied()
    }

    /// Keep only the squares accepted by `keep`, preserving order
    #[must_use]
    pub fn filter<F>(&self, mut keep: F) -> Moves
    where
        F: FnMut(Direction, Square) -> bool,
    {
        let mut out = Moves::new();
        for (dir, ray) in self.iter() {
            for &sq in ray {
                if keep(dir, sq) {
                    out.push(dir, sq);
                }
            }
        }
        out
    }

    /// Replace one ray wholesale
    pub(crate) fn set(&mut self, dir: Direction, squares: Vec<Square>) {
        self.rays[dir.index()] = squares;
    }

    /// Order every ray nearest-first from `origin`
    pub(crate) fn sort_from(&mut self, origin: Square) {
        for ray in &mut self.rays {
            ray.sort_by_key(|sq| (origin.distance(*sq), *sq));
        }
    }
}

impl Index<Direction> for Moves {
    type Output = [Square];

    fn index(&self, dir: Direction) -> &Self::Output {
        self.get(dir)
    }
}
