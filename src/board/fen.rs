use std::collections::BTreeMap;

use super::error::FenError;
use super::figure::Figure;
use super::state::{check_kings, HistoryEntry};
use super::{Color, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// FEN rows are listed from Black's back rank down, which matches the
    /// rank numbering of `Square`. Castling rights are validated but not
    /// kept. An en passant square is turned into the pawn double step that
    /// allows it, so the capture is offered exactly as after a played move.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        let mut figures = BTreeMap::new();
        for (rank, row) in parts[0].split('/').enumerate() {
            if rank >= 8 {
                return Err(FenError::InvalidRank { rank });
            }
            let mut file = 0;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(FenError::TooManyFiles { rank, files: file });
                    }
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank,
                        files: file + 1,
                    });
                }
                let square = Square(rank, file);
                figures.insert(square, Figure::placed(piece, color, square));
                file += 1;
            }
        }
        check_kings(&figures)?;

        // Parse side to move
        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Castling rights are accepted for compatibility only
        if let Some(castling) = parts.get(2) {
            let bad = castling
                .chars()
                .find(|c| !matches!(c, 'K' | 'Q' | 'k' | 'q' | '-'));
            if let Some(bad) = bad {
                return Err(FenError::InvalidCastling { char: bad });
            }
        }

        let history = match parts.get(3) {
            Some(&ep) if ep != "-" => vec![double_step_for(ep, side_to_move, &figures)?],
            _ => Vec::new(),
        };

        let mut position =
            Position::with_figures(figures, side_to_move, history).reject_waiting_side_in_check()?;
        position.halfmove_clock = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        position.fullmove_number = parts.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);
        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    ///
    /// The castling field is always `-`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(fig) = self.figures.get(&Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(fig.piece().to_fen_char(fig.color()));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .history
            .last()
            .and_then(HistoryEntry::skipped_square)
            .map_or_else(|| "-".to_string(), Square::to_algebraic);

        format!(
            "{} {} - {} {} {}",
            rows.join("/"),
            active,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

/// The enemy double step that leaves `ep` as the en passant square.
fn double_step_for(
    ep: &str,
    side_to_move: Color,
    figures: &BTreeMap<Square, Figure>,
) -> Result<HistoryEntry, FenError> {
    let invalid = || FenError::InvalidEnPassant {
        found: ep.to_string(),
    };
    let skipped: Square = ep.parse().map_err(|_| invalid())?;

    let mover = side_to_move.opponent();
    let step = mover.pawn_direction();
    let from = Square(mover.pawn_start_rank(), skipped.file());
    if from.offset(step, 0) != Some(skipped) {
        return Err(invalid());
    }
    let to = skipped.offset(step, 0).ok_or_else(invalid)?;

    let pawn_landed = figures
        .get(&to)
        .is_some_and(|fig| fig.piece() == Piece::Pawn && fig.color() == mover);
    if !pawn_landed || figures.contains_key(&skipped) || figures.contains_key(&from) {
        return Err(invalid());
    }

    Ok(HistoryEntry {
        from,
        to,
        figure: Figure::new(Piece::Pawn, mover, from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    #[test]
    fn test_start_position_round_trip() {
        assert_eq!(Position::initial().to_fen(), START_FEN);
        let parsed = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(parsed.to_fen(), START_FEN);
        assert_eq!(parsed.walk_move_pairs().count(), 20);
    }

    #[test]
    fn test_fen_ranks_match_squares() {
        let pos = Position::from_fen(START_FEN);
        let king = pos.figure_at(Square(7, 4)).unwrap();
        assert_eq!((king.piece(), king.color()), (Piece::King, Color::White));
        assert!(!king.has_moved());
        assert_eq!(pos.figure_at(Square(0, 3)).map(|f| f.piece()), Some(Piece::Queen));
    }

    #[test]
    fn test_en_passant_field_enables_capture() {
        let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let last = pos.history().last().unwrap();
        assert_eq!((last.from, last.to), (Square(1, 3), Square(3, 3)));
        assert!(pos.legal_walk_moves(Square(3, 4)).unwrap().contains(Square(2, 3)));
        assert_eq!(pos.to_fen(), "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    }

    #[test]
    fn test_en_passant_after_double_step_in_play() {
        let pos = Position::initial()
            .apply_move(Square(6, 4), Square(4, 4), None)
            .unwrap();
        assert_eq!(
            pos.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - e3 0 1"
        );
    }

    #[test]
    fn test_invalid_en_passant() {
        assert!(matches!(
            Position::try_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - e6 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Position::try_from_fen("4k3/8/8/3pP3/8/8/8/4K3 b - d6 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            Position::try_from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - z9 0 1"),
            Err(FenError::InvalidEnPassant { .. })
        ));
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            Position::try_from_fen("8/8/8/8/8/8/8/8"),
            Err(FenError::TooFewParts { found: 1 })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4X3 w - - 0 1"),
            Err(FenError::InvalidPiece { char: 'X' })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::MissingKing {
                color: Color::White
            })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(FenError::TooManyKings {
                color: Color::White
            })
        );
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 w X - 0 1"),
            Err(FenError::InvalidCastling { char: 'X' })
        );
        assert!(matches!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K3/8 w - - 0 1"),
            Err(FenError::InvalidRank { rank: 8 })
        ));
        assert!(matches!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(FenError::TooManyFiles { .. })
        ));
    }

    #[test]
    fn test_rejects_waiting_side_in_check() {
        // White to move with the rook already attacking the black king.
        assert_eq!(
            Position::try_from_fen("4k3/8/8/8/8/8/8/K3R3 w - - 0 1"),
            Err(FenError::OpponentInCheck {
                color: Color::Black
            })
        );
        // A pawn check counts too, and so does a check by a pinned figure.
        assert_eq!(
            Position::try_from_fen("4k3/3P4/8/8/8/8/8/K7 w - - 0 1"),
            Err(FenError::OpponentInCheck {
                color: Color::Black
            })
        );
        assert_eq!(
            Position::try_from_fen("3k1r2/5N2/8/8/8/8/8/5K2 w - - 0 1"),
            Err(FenError::OpponentInCheck {
                color: Color::Black
            })
        );
        // The same placement is fine with the checked side on move.
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/K3R3 b - - 0 1");
        assert!(pos.checks().is_check());
        assert!(!pos.legal_walk_moves(Square(7, 4)).unwrap().contains(Square(0, 4)));
    }

    #[test]
    #[should_panic(expected = "Invalid FEN string")]
    fn test_from_fen_panics_on_garbage() {
        let _ = Position::from_fen("garbage");
    }
}
