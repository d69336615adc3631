use std::collections::BTreeMap;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::FenError;
use super::figure::Figure;
use super::movegen::{CheckInfo, PinInfo};
use super::{Color, Moves, Piece, Square};

/// Back rank layout from file 0 to file 7.
pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static INITIAL: Lazy<Position> = Lazy::new(|| {
    let mut figures = BTreeMap::new();
    for color in Color::BOTH {
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            let sq = Square(color.back_rank(), file);
            figures.insert(sq, Figure::new(piece, color, sq));
        }
        for file in 0..8 {
            let sq = Square(color.pawn_start_rank(), file);
            figures.insert(sq, Figure::new(Piece::Pawn, color, sq));
        }
    }
    Position::with_figures(figures, Color::White, Vec::new())
});

/// One applied move: where it went and the moving figure as it stood before.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    pub from: Square,
    pub to: Square,
    pub figure: Figure,
}

impl HistoryEntry {
    /// Returns true if this entry is a pawn advancing two ranks
    #[must_use]
    pub fn is_double_step(&self) -> bool {
        self.figure.piece() == Piece::Pawn
            && self.from.file() == self.to.file()
            && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// The square a double-stepping pawn passed over
    #[must_use]
    pub fn skipped_square(&self) -> Option<Square> {
        if self.is_double_step() {
            Some(Square((self.from.rank() + self.to.rank()) / 2, self.from.file()))
        } else {
            None
        }
    }
}

/// A position: figures with their legal move sets, side to move and history.
///
/// Positions are values. `apply_move` returns a successor and leaves the
/// receiver untouched, so a rejected move needs no rollback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) figures: BTreeMap<Square, Figure>,
    pub(crate) side_to_move: Color,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) checks: CheckInfo,
    pub(crate) pins: PinInfo,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

impl Position {
    /// The standard starting position with legality computed.
    #[must_use]
    pub fn initial() -> Self {
        INITIAL.clone()
    }

    /// Assemble a position from placed figures and compute legality.
    pub(crate) fn with_figures(
        figures: BTreeMap<Square, Figure>,
        side_to_move: Color,
        history: Vec<HistoryEntry>,
    ) -> Self {
        let mut position = Position {
            figures,
            side_to_move,
            history,
            checks: CheckInfo::default(),
            pins: PinInfo::default(),
            halfmove_clock: 0,
            fullmove_number: 1,
        };
        position.recompute();
        position
    }

    /// Reject a set-up position whose side not on move is in check.
    pub(crate) fn reject_waiting_side_in_check(self) -> Result<Self, FenError> {
        let waiting = self.side_to_move.opponent();
        let mut flipped = self.clone();
        flipped.side_to_move = waiting;
        flipped.recompute();
        if flipped.checks.is_check() {
            return Err(FenError::OpponentInCheck { color: waiting });
        }
        Ok(self)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The figure on `square`, if any
    #[inline]
    #[must_use]
    pub fn figure_at(&self, square: Square) -> Option<&Figure> {
        self.figures.get(&square)
    }

    /// All figures keyed by square, in square order
    pub fn figures(&self) -> impl Iterator<Item = &Figure> + '_ {
        self.figures.values()
    }

    /// Figures of one color
    pub fn figures_of(&self, color: Color) -> impl Iterator<Item = &Figure> + '_ {
        self.figures.values().filter(move |fig| fig.color() == color)
    }

    /// Moves applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Checks against the side to move
    #[must_use]
    pub fn checks(&self) -> &CheckInfo {
        &self.checks
    }

    /// Pins against the side to move
    #[must_use]
    pub fn pins(&self) -> &PinInfo {
        &self.pins
    }

    /// Plies since the last pawn move or capture
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Full move counter, starting at 1 and bumped after Black moves
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Square of `color`'s king
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.figures
            .values()
            .find(|fig| fig.piece() == Piece::King && fig.color() == color)
            .map(Figure::square)
    }

    /// Walk moves of the figure on `square`.
    ///
    /// Only the side to move has authoritative walk moves; the other side's
    /// sets ignore checks and pins against it.
    #[must_use]
    pub fn legal_walk_moves(&self, square: Square) -> Option<&Moves> {
        self.figures.get(&square).map(Figure::walk_moves)
    }

    /// Attack moves of the figure on `square`
    #[must_use]
    pub fn legal_attack_moves(&self, square: Square) -> Option<&Moves> {
        self.figures.get(&square).map(Figure::attack_moves)
    }

    /// Every `(from, to)` walk move of the side to move
    pub fn walk_move_pairs(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.figures_of(self.side_to_move)
            .flat_map(|fig| fig.walk_moves().squares().map(move |to| (fig.square(), to)))
    }

    #[inline]
    pub(crate) fn is_occupied(&self, square: Square) -> bool {
        self.figures.contains_key(&square)
    }

    #[inline]
    pub(crate) fn color_at(&self, square: Square) -> Option<Color> {
        self.figures.get(&square).map(Figure::color)
    }
}

/// Require exactly one king per color.
pub(crate) fn check_kings(figures: &BTreeMap<Square, Figure>) -> Result<(), FenError> {
    for color in Color::BOTH {
        let kings = figures
            .values()
            .filter(|fig| fig.piece() == Piece::King && fig.color() == color)
            .count();
        match kings {
            0 => return Err(FenError::MissingKing { color }),
            1 => {}
            _ => return Err(FenError::TooManyKings { color }),
        }
    }
    Ok(())
}

/// The standard starting position with legality computed.
#[must_use]
pub fn initial_position() -> Position {
    Position::initial()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let pos = Position::initial();
        assert_eq!(pos.figures().count(), 32);
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.king_square(Color::White), Some(Square(7, 4)));
        assert_eq!(pos.king_square(Color::Black), Some(Square(0, 4)));
        assert_eq!(pos.figure_at(Square(7, 3)).map(Figure::piece), Some(Piece::Queen));
        assert_eq!(pos.figure_at(Square(1, 0)).map(Figure::color), Some(Color::Black));
        assert!(pos.history().is_empty());
        assert!(!pos.checks().is_check());
    }

    #[test]
    fn test_initial_walk_moves() {
        let pos = initial_position();
        assert_eq!(pos.walk_move_pairs().count(), 20);

        let knight = pos.legal_walk_moves(Square(7, 1)).unwrap();
        assert!(knight.contains(Square(5, 0)));
        assert!(knight.contains(Square(5, 2)));
        assert_eq!(knight.len(), 2);

        assert!(pos.legal_walk_moves(Square(7, 0)).unwrap().is_empty());
        assert!(pos.legal_walk_moves(Square(4, 4)).is_none());
    }

    #[test]
    fn test_double_step_entry() {
        let pawn = Figure::new(Piece::Pawn, Color::Black, Square(1, 3));
        let entry = HistoryEntry {
            from: Square(1, 3),
            to: Square(3, 3),
            figure: pawn.clone(),
        };
        assert!(entry.is_double_step());
        assert_eq!(entry.skipped_square(), Some(Square(2, 3)));

        let single = HistoryEntry {
            from: Square(1, 3),
            to: Square(2, 3),
            figure: pawn,
        };
        assert!(!single.is_double_step());
        assert_eq!(single.skipped_square(), None);
    }
}
