//! Fluent builder for constructing positions.
//!
//! Allows creating positions figure by figure rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_legality::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.figures().count(), 3);
//! ```

use std::collections::BTreeMap;

use super::error::FenError;
use super::figure::Figure;
use super::state::{check_kings, BACK_RANK};
use super::{Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: BTreeMap<Square, (Color, Piece)>,
    side_to_move: Color,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder with White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: BTreeMap::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for color in Color::BOTH {
            for (file, &piece) in BACK_RANK.iter().enumerate() {
                builder
                    .pieces
                    .insert(Square(color.back_rank(), file), (color, piece));
            }
            for file in 0..8 {
                builder
                    .pieces
                    .insert(Square(color.pawn_start_rank(), file), (color, Piece::Pawn));
            }
        }
        builder
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.insert(square, (color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.remove(&square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the position and compute legality.
    ///
    /// Fails unless each side has exactly one king and the side not on move
    /// is out of check.
    pub fn build(self) -> Result<Position, FenError> {
        let figures: BTreeMap<Square, Figure> = self
            .pieces
            .into_iter()
            .map(|(square, (color, piece))| (square, Figure::placed(piece, color, square)))
            .collect();
        check_kings(&figures)?;
        Position::with_figures(figures, self.side_to_move, Vec::new())
            .reject_waiting_side_in_check()
    }
}
