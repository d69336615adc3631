//! Nearest-blocker scans along the eight rays.

use super::super::{Color, Direction, Position, Square};

/// The first occupied square on each ray from a figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Blockers([Option<Square>; 8]);

impl Blockers {
    #[inline]
    #[must_use]
    pub fn get(&self, dir: Direction) -> Option<Square> {
        self.0[dir.index()]
    }

    /// (Top, Bottom)
    #[must_use]
    pub fn column(&self) -> (Option<Square>, Option<Square>) {
        (self.get(Direction::Top), self.get(Direction::Bottom))
    }

    /// (Left, Right)
    #[must_use]
    pub fn row(&self) -> (Option<Square>, Option<Square>) {
        (self.get(Direction::Left), self.get(Direction::Right))
    }

    /// (TopLeft, BottomRight)
    #[must_use]
    pub fn diagonal_ad(&self) -> (Option<Square>, Option<Square>) {
        (self.get(Direction::TopLeft), self.get(Direction::BottomRight))
    }

    /// (TopRight, BottomLeft)
    #[must_use]
    pub fn diagonal_cb(&self) -> (Option<Square>, Option<Square>) {
        (self.get(Direction::TopRight), self.get(Direction::BottomLeft))
    }
}

impl Position {
    /// Scan all eight rays from `origin` on behalf of a `color` figure.
    ///
    /// The enemy king does not stop a scan, so a slider's reach continues
    /// past the king it attacks.
    pub(crate) fn scan_blockers(&self, origin: Square, color: Color) -> Blockers {
        let mut blockers = Blockers::default();
        for dir in Direction::ALL {
            blockers.0[dir.index()] = self.nearest_on_ray(origin, dir, color);
        }
        blockers
    }

    fn nearest_on_ray(&self, origin: Square, dir: Direction, color: Color) -> Option<Square> {
        let (d_rank, d_file) = dir.step();
        let mut current = origin;
        while let Some(next) = current.offset(d_rank, d_file) {
            if let Some(fig) = self.figures.get(&next) {
                if !fig.is_enemy_king_of(color) {
                    return Some(next);
                }
            }
            current = next;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PositionBuilder};

    #[test]
    fn test_initial_rook_blockers() {
        let pos = Position::initial();
        let blockers = pos.scan_blockers(Square(7, 0), Color::White);
        assert_eq!(blockers.column(), (Some(Square(6, 0)), None));
        assert_eq!(blockers.row(), (None, Some(Square(7, 1))));
        assert_eq!(blockers.diagonal_cb(), (Some(Square(6, 1)), None));
    }

    #[test]
    fn test_enemy_king_is_transparent() {
        let pos = PositionBuilder::new()
            .piece(Square(7, 0), Color::White, Piece::Rook)
            .piece(Square(7, 7), Color::White, Piece::King)
            .piece(Square(4, 0), Color::Black, Piece::King)
            .piece(Square(2, 0), Color::Black, Piece::Pawn)
            .side_to_move(Color::Black)
            .build()
            .unwrap();

        let white_view = pos.scan_blockers(Square(7, 0), Color::White);
        assert_eq!(white_view.get(Direction::Top), Some(Square(2, 0)));

        // Seen by a black figure the same king is a blocker.
        let black_view = pos.scan_blockers(Square(7, 0), Color::Black);
        assert_eq!(black_view.get(Direction::Top), Some(Square(4, 0)));
    }
}
