//! Error types for position and move handling.

use thiserror::Error;

use super::{Color, Piece, Square};

/// Error type for rejected moves.
///
/// A rejected move never changes the position it was applied to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No figure stands on the source square
    #[error("No figure on source square {square}")]
    NoFigureAtSource { square: Square },
    /// The figure on the source square belongs to the side not on move
    #[error("Figure on {square} belongs to {color}, who is not on move")]
    NotSideToMove { square: Square, color: Color },
    /// The destination is not among the figure's walk moves
    #[error("Illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },
    /// Promotion choice outside queen/rook/bishop/knight, or given for a non-promotion
    #[error("Invalid promotion choice '{piece}'")]
    InvalidPromotionChoice { piece: Piece },
    /// A pawn reached the last rank without a promotion choice
    #[error("Pawn promoting on {square} needs a promotion choice")]
    PromotionRequired { square: Square },
}

/// Error type for square parsing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    #[error("Rank {rank} out of bounds (must be 0-7)")]
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    #[error("File {file} out of bounds (must be 0-7)")]
    FileOutOfBounds { file: usize },
    /// Neither a `rank-file` key nor algebraic notation
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// Error type for FEN parsing failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 2)
    #[error("FEN must have at least 2 parts, found {found}")]
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    #[error("Invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    /// Invalid rank in position string
    #[error("Invalid rank index {rank} in FEN")]
    InvalidRank { rank: usize },
    /// Too many files in a rank
    #[error("Too many files ({files}) in rank {rank}")]
    TooManyFiles { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    #[error("Invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    /// Invalid character in the castling field
    #[error("Invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },
    /// Invalid or inconsistent en passant square
    #[error("Invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    /// A side has no king
    #[error("{color} has no king")]
    MissingKing { color: Color },
    /// A side has more than one king
    #[error("{color} has more than one king")]
    TooManyKings { color: Color },
    /// The side not on move stands in check, so its king could be captured
    #[error("{color} is in check but not on move")]
    OpponentInCheck { color: Color },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_no_figure() {
        let err = MoveError::NoFigureAtSource {
            square: Square(4, 4),
        };
        assert!(err.to_string().contains("4-4"));
    }

    #[test]
    fn test_move_error_illegal_move() {
        let err = MoveError::IllegalMove {
            from: Square(6, 4),
            to: Square(3, 4),
        };
        let msg = err.to_string();
        assert!(msg.contains("6-4"));
        assert!(msg.contains("3-4"));
    }

    #[test]
    fn test_move_error_not_side_to_move() {
        let err = MoveError::NotSideToMove {
            square: Square(1, 0),
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_move_error_invalid_promotion() {
        let err = MoveError::InvalidPromotionChoice { piece: Piece::King };
        assert!(err.to_string().contains("'king'"));
    }

    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_missing_king() {
        let err = FenError::MissingKing {
            color: Color::White,
        };
        assert!(err.to_string().contains("White"));
    }

    #[test]
    fn test_fen_error_opponent_in_check() {
        let err = FenError::OpponentInCheck {
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black is in check"));
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::TooFewParts { found: 1 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
