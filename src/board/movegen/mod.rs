//! Legality computation.
//!
//! Every figure starts from its shape-legal default moves. Recomputation then
//! narrows them in two phases:
//! 1. the side that just moved is restricted by occupancy only, which gives
//!    its attack sets;
//! 2. checks and pins against the side to move are detected, and its figures
//!    are restricted by occupancy, checks, pins and the enemy attack sets.

pub mod checks;
pub mod geometry;
mod kings;
mod knights;
mod pawns;
pub mod pins;
mod scanner;
mod sliders;

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use super::figure::Figure;
use super::{Color, Moves, Piece, Position, Square};
use sliders::SliderType;

pub use checks::{between, detect_checks, CheckInfo};
pub use pins::{detect_pins, PinInfo};

/// Check, pin and attack state a restriction honours.
pub(crate) struct Constraints<'a> {
    pub(crate) checks: &'a CheckInfo,
    pub(crate) pins: &'a PinInfo,
    /// Squares attacked by the enemy, consulted by the king
    pub(crate) attacked: &'a BTreeSet<Square>,
}

impl Constraints<'_> {
    /// Block-check and pin filters for a non-king figure moving `from` -> `to`.
    #[inline]
    pub(crate) fn admits(&self, from: Square, to: Square) -> bool {
        self.checks.can_block(to) && self.pins.allows(from, to)
    }
}

impl Position {
    /// Recompute walk and attack moves of every figure, plus checks and pins
    /// against the side to move.
    ///
    /// Depends only on figures, side to move and history, so running it twice
    /// changes nothing.
    pub fn recompute(&mut self) {
        for fig in self.figures.values_mut() {
            fig.walk_moves = fig.default_moves.clone();
            fig.attack_moves = fig.default_moves.clone();
        }

        let mover = self.side_to_move;
        let opponent = mover.opponent();

        let no_checks = CheckInfo::default();
        let no_pins = PinInfo::default();
        let nothing_attacked = BTreeSet::new();
        let free = Constraints {
            checks: &no_checks,
            pins: &no_pins,
            attacked: &nothing_attacked,
        };
        let updates = self.restricted_side(opponent, &free);
        self.store(updates);

        self.checks = detect_checks(mover, self);
        self.pins = detect_pins(mover, self);

        let attacked = self.attacked_squares(opponent);
        let bound = Constraints {
            checks: &self.checks,
            pins: &self.pins,
            attacked: &attacked,
        };
        let updates = self.restricted_side(mover, &bound);
        self.store(updates);
    }

    /// Every square attacked by a `color` figure
    #[must_use]
    pub fn attacked_squares(&self, color: Color) -> BTreeSet<Square> {
        self.figures_of(color)
            .flat_map(|fig| fig.attack_moves().squares())
            .collect()
    }

    fn restricted_side(
        &self,
        color: Color,
        ctx: &Constraints<'_>,
    ) -> BTreeMap<Square, (Moves, Moves)> {
        self.figures_of(color)
            .map(|fig| {
                let (walk, attack) = self.restrict_figure(fig, ctx);
                trace!(
                    "{} {} on {}: {} walk, {} attack",
                    fig.color(),
                    fig.piece(),
                    fig.square(),
                    walk.len(),
                    attack.len()
                );
                (fig.square(), (walk, attack))
            })
            .collect()
    }

    fn restrict_figure(&self, fig: &Figure, ctx: &Constraints<'_>) -> (Moves, Moves) {
        match fig.piece() {
            Piece::Pawn => self.restrict_pawn(fig, ctx),
            Piece::Knight => self.restrict_knight(fig, ctx),
            Piece::Bishop => self.restrict_slider(fig, SliderType::Bishop, ctx),
            Piece::Rook => self.restrict_slider(fig, SliderType::Rook, ctx),
            Piece::Queen => self.restrict_slider(fig, SliderType::Queen, ctx),
            Piece::King => self.restrict_king(fig, ctx),
        }
    }

    fn store(&mut self, updates: BTreeMap<Square, (Moves, Moves)>) {
        for (square, (walk, attack)) in updates {
            if let Some(fig) = self.figures.get_mut(&square) {
                fig.walk_moves = walk;
                fig.attack_moves = attack;
            }
        }
    }

    /// `moves` without the squares held by `fig`'s own side.
    pub(crate) fn drop_own(&self, fig: &Figure, moves: &Moves) -> Moves {
        let color = fig.color();
        moves.filter(|_, to| self.color_at(to) != Some(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PositionBuilder;

    #[test]
    fn test_recompute_is_idempotent() {
        let pos = Position::initial()
            .apply_move(Square(6, 4), Square(4, 4), None)
            .unwrap();
        let mut again = pos.clone();
        again.recompute();
        assert_eq!(again, pos);
        again.recompute();
        assert_eq!(again, pos);
    }

    #[test]
    fn test_attacked_squares_initial() {
        let pos = Position::initial();
        let black = pos.attacked_squares(Color::Black);
        // Every square on rank 2 is covered by a black pawn.
        for file in 0..8 {
            assert!(black.contains(&Square(2, file)));
        }
        assert!(!black.contains(&Square(3, 4)));
    }

    #[test]
    fn test_double_check_leaves_only_king_moves() {
        let pos = PositionBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(7, 0), Color::White, Piece::Rook)
            .piece(Square(4, 4), Color::Black, Piece::Rook)
            .piece(Square(5, 5), Color::Black, Piece::Knight)
            .piece(Square(0, 7), Color::Black, Piece::King)
            .build()
            .unwrap();

        assert!(pos.checks().is_double_check());
        assert!(pos.legal_walk_moves(Square(7, 0)).unwrap().is_empty());
        assert!(!pos.legal_walk_moves(Square(7, 4)).unwrap().is_empty());
    }
}
