use super::super::figure::Figure;
use super::super::{Moves, Position};
use super::Constraints;

impl Position {
    /// King moves ignore the block-check and pin filters. The king may not
    /// land on its own figures, on a square between a checker and itself, or
    /// on any square an enemy figure attacks.
    pub(crate) fn restrict_king(&self, fig: &Figure, ctx: &Constraints<'_>) -> (Moves, Moves) {
        let color = fig.color();
        let walk = fig.default_moves().filter(|_, to| {
            self.color_at(to) != Some(color)
                && !ctx.checks.is_between(to)
                && !ctx.attacked.contains(&to)
        });
        (walk, fig.default_moves().clone())
    }
}
