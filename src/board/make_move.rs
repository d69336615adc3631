use log::debug;

use super::error::MoveError;
use super::state::HistoryEntry;
use super::{Color, Piece, Position, Square};

impl Position {
    /// Apply a move and return the resulting position.
    ///
    /// `promotion` must be given exactly when a pawn reaches its last rank,
    /// and must then be a queen, rook, bishop or knight. The receiver is left
    /// untouched whether or not the move is accepted.
    ///
    /// # Example
    /// ```
    /// use chess_legality::board::{Position, Square};
    ///
    /// let start = Position::initial();
    /// let next = start.apply_move(Square(6, 4), Square(4, 4), None).unwrap();
    /// assert!(next.figure_at(Square(4, 4)).is_some());
    /// assert!(start.figure_at(Square(4, 4)).is_none());
    /// ```
    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Position, MoveError> {
        let result = self.try_apply_move(from, to, promotion);
        match &result {
            Ok(next) => debug!(
                "applied {from} -> {to}, {} to move{}",
                next.side_to_move,
                if next.checks.is_check() { ", in check" } else { "" }
            ),
            Err(err) => debug!("rejected {from} -> {to}: {err}"),
        }
        result
    }

    /// Whether moving the figure on `from` to `to` promotes a pawn
    #[must_use]
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        self.figures.get(&from).is_some_and(|fig| {
            fig.piece() == Piece::Pawn && to.rank() == fig.color().pawn_promotion_rank()
        })
    }

    fn try_apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Position, MoveError> {
        let figure = self
            .figures
            .get(&from)
            .ok_or(MoveError::NoFigureAtSource { square: from })?;
        if figure.color() != self.side_to_move {
            return Err(MoveError::NotSideToMove {
                square: from,
                color: figure.color(),
            });
        }
        if !figure.walk_moves().contains(to) {
            return Err(MoveError::IllegalMove { from, to });
        }

        let landing_piece = match (self.is_promotion(from, to), promotion) {
            (true, None) => return Err(MoveError::PromotionRequired { square: to }),
            (true, Some(piece)) if !piece.is_promotion_choice() => {
                return Err(MoveError::InvalidPromotionChoice { piece })
            }
            (true, Some(piece)) => piece,
            (false, Some(piece)) => return Err(MoveError::InvalidPromotionChoice { piece }),
            (false, None) => figure.piece(),
        };

        let captured = match self.en_passant_for(figure) {
            Some((target, victim)) if target == to => Some(victim),
            _ => self.figures.contains_key(&to).then_some(to),
        };

        let mut next = self.clone();
        if let Some(victim) = captured {
            next.figures.remove(&victim);
        }
        next.figures.remove(&from);
        next.figures.insert(to, figure.relocated(to, landing_piece));

        next.history.push(HistoryEntry {
            from,
            to,
            figure: figure.clone(),
        });
        next.halfmove_clock = if figure.piece() == Piece::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            next.fullmove_number += 1;
        }
        next.side_to_move = self.side_to_move.opponent();
        next.recompute();
        Ok(next)
    }
}
