//! Check detection against a king.

use std::collections::BTreeMap;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::{Color, Direction, Piece, Position, Square};

/// Squares strictly between `from` and `to`, ordered from `from`.
///
/// Empty when the two squares share no rank, file or diagonal, or when they
/// are adjacent.
#[must_use]
pub fn between(from: Square, to: Square) -> Vec<Square> {
    let d_rank = from.rank().abs_diff(to.rank());
    let d_file = from.file().abs_diff(to.file());
    let aligned = d_rank == 0 || d_file == 0 || d_rank == d_file;
    let Some(dir) = Direction::classify(from, to).filter(|_| aligned) else {
        return Vec::new();
    };

    let (step_rank, step_file) = dir.step();
    let mut squares = Vec::new();
    let mut current = from;
    while let Some(next) = current.offset(step_rank, step_file) {
        if next == to {
            break;
        }
        squares.push(next);
        current = next;
    }
    squares
}

/// Checks against one king: attacker square to the squares between the king
/// and the attacker, followed by the attacker itself.
///
/// An empty map means no check; two entries mean double check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckInfo(BTreeMap<Square, Vec<Square>>);

impl CheckInfo {
    #[inline]
    #[must_use]
    pub fn is_check(&self) -> bool {
        !self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_double_check(&self) -> bool {
        self.0.len() > 1
    }

    /// Number of checking figures
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Squares of the checking figures
    pub fn attackers(&self) -> impl Iterator<Item = Square> + '_ {
        self.0.keys().copied()
    }

    /// The check ray of the attacker on `attacker`, ending with the attacker
    #[must_use]
    pub fn ray(&self, attacker: Square) -> Option<&[Square]> {
        self.0.get(&attacker).map(Vec::as_slice)
    }

    /// `(attacker, ray)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        self.0.iter().map(|(sq, ray)| (*sq, ray.as_slice()))
    }

    /// Whether a non-king figure landing on `square` deals with the check.
    ///
    /// Always true without check, never true in double check.
    #[must_use]
    pub fn can_block(&self, square: Square) -> bool {
        match self.0.len() {
            0 => true,
            1 => self.0.values().any(|ray| ray.contains(&square)),
            _ => false,
        }
    }

    /// The single checker's square, if there is exactly one
    #[must_use]
    pub fn sole_attacker(&self) -> Option<Square> {
        if self.0.len() == 1 {
            self.0.keys().next().copied()
        } else {
            None
        }
    }

    /// Whether `square` lies strictly between a checker and the king
    #[must_use]
    pub fn is_between(&self, square: Square) -> bool {
        self.0
            .values()
            .any(|ray| ray.split_last().is_some_and(|(_, inner)| inner.contains(&square)))
    }

    pub(crate) fn insert(&mut self, attacker: Square, ray: Vec<Square>) {
        self.0.insert(attacker, ray);
    }
}

/// Find every enemy figure giving check to `color`'s king.
///
/// Pawns are judged by their attack moves and every other piece by its
/// default moves; a line is only a check when nothing stands between.
#[must_use]
pub fn detect_checks(color: Color, position: &Position) -> CheckInfo {
    let mut checks = CheckInfo::default();
    let Some(king) = position.king_square(color) else {
        return checks;
    };

    for enemy in position.figures_of(color.opponent()) {
        let reach = match enemy.piece() {
            Piece::Pawn => enemy.attack_moves(),
            _ => enemy.default_moves(),
        };
        if !reach.contains(king) {
            continue;
        }

        let mut ray = between(king, enemy.square());
        if ray.iter().any(|sq| position.is_occupied(*sq)) {
            continue;
        }
        ray.push(enemy.square());
        debug!(
            "{color} king on {king} checked by {} {} on {}",
            enemy.color(),
            enemy.piece(),
            enemy.square()
        );
        checks.insert(enemy.square(), ray);
    }
    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PositionBuilder;

    #[test]
    fn test_between_lines() {
        assert_eq!(
            between(Square(7, 4), Square(7, 0)),
            vec![Square(7, 3), Square(7, 2), Square(7, 1)]
        );
        assert_eq!(between(Square(0, 0), Square(3, 3)), vec![Square(1, 1), Square(2, 2)]);
        assert_eq!(between(Square(5, 2), Square(2, 2)), vec![Square(4, 2), Square(3, 2)]);
    }

    #[test]
    fn test_between_unaligned_or_adjacent() {
        assert!(between(Square(4, 4), Square(2, 5)).is_empty());
        assert!(between(Square(4, 4), Square(4, 5)).is_empty());
        assert!(between(Square(4, 4), Square(4, 4)).is_empty());
    }

    #[test]
    fn test_no_check_in_initial_position() {
        let pos = Position::initial();
        assert!(detect_checks(Color::White, &pos).is_empty());
        assert!(detect_checks(Color::Black, &pos).is_empty());
    }

    #[test]
    fn test_blocked_line_is_not_check() {
        let pos = PositionBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::Rook)
            .piece(Square(4, 4), Color::White, Piece::Bishop)
            .piece(Square(0, 7), Color::Black, Piece::King)
            .build()
            .unwrap();
        assert!(!detect_checks(Color::White, &pos).is_check());
    }

    #[test]
    fn test_rook_check_ray() {
        let pos = PositionBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(4, 4), Color::Black, Piece::Rook)
            .piece(Square(0, 0), Color::Black, Piece::King)
            .build()
            .unwrap();
        let checks = detect_checks(Color::White, &pos);
        assert_eq!(checks.len(), 1);
        assert_eq!(
            checks.ray(Square(4, 4)),
            Some(&[Square(6, 4), Square(5, 4), Square(4, 4)][..])
        );
        assert!(checks.can_block(Square(5, 4)));
        assert!(checks.can_block(Square(4, 4)));
        assert!(!checks.can_block(Square(5, 3)));
        assert!(checks.is_between(Square(6, 4)));
        assert!(!checks.is_between(Square(4, 4)));
        assert_eq!(checks.sole_attacker(), Some(Square(4, 4)));
    }

    #[test]
    fn test_knight_and_pawn_checks() {
        let pos = PositionBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(5, 5), Color::Black, Piece::Knight)
            .piece(Square(6, 3), Color::Black, Piece::Pawn)
            .piece(Square(0, 0), Color::Black, Piece::King)
            .build()
            .unwrap();
        let checks = detect_checks(Color::White, &pos);
        assert!(checks.is_double_check());
        assert_eq!(checks.ray(Square(5, 5)), Some(&[Square(5, 5)][..]));
        assert_eq!(checks.ray(Square(6, 3)), Some(&[Square(6, 3)][..]));
        assert!(!checks.can_block(Square(5, 5)));
    }
}
