use super::super::figure::Figure;
use super::super::{Color, Direction, Moves, Piece, Position, Square};
use super::Constraints;

impl Position {
    /// The en passant capture available to the pawn `fig`, as
    /// `(destination, captured pawn square)`.
    ///
    /// Only the last history entry counts: it must be an enemy pawn's double
    /// step that landed beside `fig` on the same rank.
    pub(crate) fn en_passant_for(&self, fig: &Figure) -> Option<(Square, Square)> {
        if fig.piece() != Piece::Pawn {
            return None;
        }
        let last = self.history.last()?;
        let skipped = last.skipped_square()?;
        let from = fig.square();
        let landed = last.to;

        let beside = landed.rank() == from.rank() && landed.file().abs_diff(from.file()) == 1;
        let enemy_pawn = self
            .figures
            .get(&landed)
            .is_some_and(|victim| victim.piece() == Piece::Pawn && victim.color() != fig.color());
        if beside && enemy_pawn && last.figure.color() != fig.color() {
            Some((skipped, landed))
        } else {
            None
        }
    }

    /// Whether taking `victim` en passant by moving `from` -> `to` would open
    /// a line from an enemy slider onto the `color` king. Both pawns leave the
    /// rank at once, which the pin filter cannot see.
    fn en_passant_exposes_king(
        &self,
        color: Color,
        from: Square,
        to: Square,
        victim: Square,
    ) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        Direction::ALL.into_iter().any(|dir| {
            let (d_rank, d_file) = dir.step();
            let mut current = king;
            while let Some(next) = current.offset(d_rank, d_file) {
                if next == to {
                    return false;
                }
                if next != from && next != victim {
                    if let Some(fig) = self.figures.get(&next) {
                        return fig.color() != color
                            && match fig.piece() {
                                Piece::Queen => true,
                                Piece::Rook => dir.is_straight(),
                                Piece::Bishop => dir.is_diagonal(),
                                _ => false,
                            };
                    }
                }
                current = next;
            }
            false
        })
    }

    pub(crate) fn restrict_pawn(&self, fig: &Figure, ctx: &Constraints<'_>) -> (Moves, Moves) {
        let from = fig.square();
        let color = fig.color();
        let forward = color.pawn_direction();
        let diagonals: Vec<Square> = [-1, 1]
            .into_iter()
            .filter_map(|d_file| from.offset(forward, d_file))
            .collect();

        let mut attack = Moves::new();
        for &to in &diagonals {
            if ctx.admits(from, to) {
                push_toward(&mut attack, from, to);
            }
        }

        let mut walk = Moves::new();
        if let Some(one) = from.offset(forward, 0).filter(|sq| !self.is_occupied(*sq)) {
            if ctx.admits(from, one) {
                push_toward(&mut walk, from, one);
            }
            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(forward, 0).filter(|sq| !self.is_occupied(*sq)) {
                    if ctx.admits(from, two) {
                        push_toward(&mut walk, from, two);
                    }
                }
            }
        }

        for &to in &diagonals {
            let holds_enemy = self.color_at(to).is_some_and(|c| c != color);
            if holds_enemy && ctx.admits(from, to) {
                push_toward(&mut walk, from, to);
            }
        }

        if let Some((to, victim)) = self.en_passant_for(fig) {
            // Taking the double-stepped pawn also answers a check it gives.
            let answers_check =
                ctx.checks.can_block(to) || ctx.checks.sole_attacker() == Some(victim);
            if answers_check
                && ctx.pins.allows(from, to)
                && !self.en_passant_exposes_king(color, from, to, victim)
            {
                push_toward(&mut walk, from, to);
            }
        }

        walk.sort_from(from);
        (walk, attack)
    }
}

fn push_toward(moves: &mut Moves, from: Square, to: Square) {
    if let Some(dir) = Direction::classify(from, to) {
        moves.push(dir, to);
    }
}
