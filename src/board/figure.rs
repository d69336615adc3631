//! A piece standing on the board together with its computed move sets.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::movegen::geometry::default_moves;
use super::state::BACK_RANK;
use super::{Color, Moves, Piece, Square};

/// A piece on a square with its cached move sets.
///
/// `default_moves` is the shape-legal set for the piece on its square.
/// `walk_moves` and `attack_moves` are narrowed from it every time the owning
/// position recomputes legality.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Figure {
    pub(crate) piece: Piece,
    pub(crate) color: Color,
    pub(crate) square: Square,
    pub(crate) has_moved: bool,
    pub(crate) default_moves: Moves,
    pub(crate) walk_moves: Moves,
    pub(crate) attack_moves: Moves,
}

impl Figure {
    /// Create a figure with its default moves computed and not yet restricted.
    #[must_use]
    pub fn new(piece: Piece, color: Color, square: Square) -> Self {
        let defaults = default_moves(piece, square);
        Figure {
            piece,
            color,
            square,
            has_moved: false,
            walk_moves: defaults.clone(),
            attack_moves: defaults.clone(),
            default_moves: defaults,
        }
    }

    /// A figure set up on `square`, counted as moved unless the square is
    /// where the piece stands in the starting position.
    pub(crate) fn placed(piece: Piece, color: Color, square: Square) -> Self {
        let home = match piece {
            Piece::Pawn => square.rank() == color.pawn_start_rank(),
            _ => square.rank() == color.back_rank() && BACK_RANK[square.file()] == piece,
        };
        let mut fig = Figure::new(piece, color, square);
        fig.has_moved = !home;
        fig
    }

    /// The same figure placed on `square` (possibly as another piece), marked as moved.
    pub(crate) fn relocated(&self, square: Square, piece: Piece) -> Self {
        let mut moved = Figure::new(piece, self.color, square);
        moved.has_moved = true;
        moved
    }

    #[inline]
    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Whether the figure has moved since the game started
    #[inline]
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[must_use]
    pub fn default_moves(&self) -> &Moves {
        &self.default_moves
    }

    /// Squares the figure may move to this ply
    #[must_use]
    pub fn walk_moves(&self) -> &Moves {
        &self.walk_moves
    }

    /// Squares the figure threatens, including squares held by its own side
    #[must_use]
    pub fn attack_moves(&self) -> &Moves {
        &self.attack_moves
    }

    pub(crate) fn is_enemy_king_of(&self, color: Color) -> bool {
        self.piece == Piece::King && self.color != color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_figure_starts_unrestricted() {
        let fig = Figure::new(Piece::Rook, Color::White, Square(7, 0));
        assert_eq!(fig.default_moves().len(), 14);
        assert_eq!(fig.walk_moves(), fig.default_moves());
        assert_eq!(fig.attack_moves(), fig.default_moves());
        assert!(!fig.has_moved());
    }

    #[test]
    fn test_placed_tracks_home_squares() {
        assert!(!Figure::placed(Piece::Rook, Color::White, Square(7, 0)).has_moved());
        assert!(Figure::placed(Piece::Rook, Color::White, Square(7, 1)).has_moved());
        assert!(!Figure::placed(Piece::Pawn, Color::Black, Square(1, 5)).has_moved());
        assert!(Figure::placed(Piece::Pawn, Color::Black, Square(3, 5)).has_moved());
        assert!(Figure::placed(Piece::King, Color::Black, Square(7, 4)).has_moved());
    }

    #[test]
    fn test_relocated_marks_moved_and_recomputes_defaults() {
        let pawn = Figure::new(Piece::Pawn, Color::White, Square(1, 4));
        let queen = pawn.relocated(Square(0, 4), Piece::Queen);
        assert_eq!(queen.piece(), Piece::Queen);
        assert_eq!(queen.color(), Color::White);
        assert!(queen.has_moved());
        assert_eq!(queen.default_moves().len(), 21);
    }
}
