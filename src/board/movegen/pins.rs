//! Absolute pin detection.

use std::collections::BTreeMap;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::{Color, Position, Square};
use super::checks::between;

/// Pinned square to the squares between the king and the pinner, followed by
/// the pinner. A pinned figure may only move along that ray.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinInfo(BTreeMap<Square, Vec<Square>>);

impl PinInfo {
    /// The ray the figure on `square` is pinned to
    #[inline]
    #[must_use]
    pub fn ray_for(&self, square: Square) -> Option<&[Square]> {
        self.0.get(&square).map(Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn is_pinned(&self, square: Square) -> bool {
        self.0.contains_key(&square)
    }

    /// Whether the figure on `from` may land on `to` without leaving its pin ray
    #[must_use]
    pub fn allows(&self, from: Square, to: Square) -> bool {
        self.ray_for(from).map_or(true, |ray| ray.contains(&to))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(pinned, ray)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        self.0.iter().map(|(sq, ray)| (*sq, ray.as_slice()))
    }
}

/// Find the figures of `color` pinned to their king.
///
/// Only sliders pin. A line pins when exactly one figure stands between the
/// slider and the king and that figure belongs to `color`.
#[must_use]
pub fn detect_pins(color: Color, position: &Position) -> PinInfo {
    let mut pins = PinInfo::default();
    let Some(king) = position.king_square(color) else {
        return pins;
    };

    for enemy in position.figures_of(color.opponent()) {
        if !enemy.piece().is_slider() || !enemy.default_moves().contains(king) {
            continue;
        }

        let ray = between(king, enemy.square());
        let mut occupants = ray.iter().filter_map(|sq| position.color_at(*sq));
        let (Some(only), None) = (occupants.next(), occupants.next()) else {
            continue;
        };
        if only != color {
            continue;
        }

        let Some(pinned) = ray.iter().copied().find(|sq| position.is_occupied(*sq)) else {
            continue;
        };
        let mut pin_ray = ray;
        pin_ray.push(enemy.square());
        debug!(
            "{color} figure on {pinned} pinned by {} on {}",
            enemy.piece(),
            enemy.square()
        );
        pins.0.insert(pinned, pin_ray);
    }
    pins
}
