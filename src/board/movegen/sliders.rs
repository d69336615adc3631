use super::super::figure::Figure;
use super::super::{Direction, Moves, Position, Square};
use super::Constraints;

/// Type of sliding piece, picking which scanner families cut its rays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

/// Keep the squares of `ray` up to and including `blocker`.
fn cut_ray(ray: &[Square], origin: Square, blocker: Option<Square>) -> Vec<Square> {
    match blocker {
        Some(stop) => {
            let limit = origin.distance(stop);
            ray.iter()
                .copied()
                .take_while(|sq| origin.distance(*sq) <= limit)
                .collect()
        }
        None => ray.to_vec(),
    }
}

impl Position {
    /// Rays of a slider cut at the first blocker, before check and pin filtering.
    pub(crate) fn slider_reach(&self, fig: &Figure, slider: SliderType) -> Moves {
        let from = fig.square();
        let blockers = self.scan_blockers(from, fig.color());
        let defaults = fig.default_moves();
        let mut reach = Moves::new();

        if matches!(slider, SliderType::Rook | SliderType::Queen) {
            let (top, bottom) = blockers.column();
            let (left, right) = blockers.row();
            for (dir, blocker) in [
                (Direction::Top, top),
                (Direction::Bottom, bottom),
                (Direction::Left, left),
                (Direction::Right, right),
            ] {
                reach.set(dir, cut_ray(defaults.get(dir), from, blocker));
            }
        }
        if matches!(slider, SliderType::Bishop | SliderType::Queen) {
            let (top_left, bottom_right) = blockers.diagonal_ad();
            let (top_right, bottom_left) = blockers.diagonal_cb();
            for (dir, blocker) in [
                (Direction::TopLeft, top_left),
                (Direction::BottomRight, bottom_right),
                (Direction::TopRight, top_right),
                (Direction::BottomLeft, bottom_left),
            ] {
                reach.set(dir, cut_ray(defaults.get(dir), from, blocker));
            }
        }
        reach
    }

    pub(crate) fn restrict_slider(
        &self,
        fig: &Figure,
        slider: SliderType,
        ctx: &Constraints<'_>,
    ) -> (Moves, Moves) {
        let from = fig.square();
        let attack = self
            .slider_reach(fig, slider)
            .filter(|_, to| ctx.admits(from, to));
        let walk = self.drop_own(fig, &attack);
        (walk, attack)
    }
}
