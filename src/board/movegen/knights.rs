use super::super::figure::Figure;
use super::super::{Moves, Position};
use super::Constraints;

impl Position {
    /// Knights jump, so nothing on the board cuts their rays.
    pub(crate) fn restrict_knight(&self, fig: &Figure, ctx: &Constraints<'_>) -> (Moves, Moves) {
        let from = fig.square();
        let attack = fig.default_moves().filter(|_, to| ctx.admits(from, to));
        let walk = self.drop_own(fig, &attack);
        (walk, attack)
    }
}
