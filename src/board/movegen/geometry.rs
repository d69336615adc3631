//! Shape legality and default move generation.
//!
//! Nothing here looks at the board: a move is shape-legal when it fits the
//! piece's movement pattern on an empty board.

use super::super::{Direction, Moves, Piece, Square};

/// Whether `piece` could move from `from` to `to` on an empty board.
///
/// Pawn direction is not checked here; pawn filtering happens during
/// restriction, where the side and occupancy are known.
#[must_use]
pub fn shape_legal(piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let d_rank = from.rank().abs_diff(to.rank());
    let d_file = from.file().abs_diff(to.file());

    match piece {
        Piece::Pawn => {
            (d_rank == 1 && d_file == 1) || (d_file == 0 && (d_rank == 1 || d_rank == 2))
        }
        Piece::Knight => (d_rank == 1 && d_file == 2) || (d_rank == 2 && d_file == 1),
        Piece::Bishop => d_rank == d_file,
        Piece::Rook => d_rank == 0 || d_file == 0,
        Piece::Queen => d_rank == d_file || d_rank == 0 || d_file == 0,
        Piece::King => d_rank.max(d_file) == 1,
    }
}

/// All shape-legal destinations of `piece` on `from`, bucketed by direction.
#[must_use]
pub fn default_moves(piece: Piece, from: Square) -> Moves {
    let mut moves = Moves::new();
    for to in Square::all() {
        if !shape_legal(piece, from, to) {
            continue;
        }
        if let Some(dir) = Direction::classify(from, to) {
            moves.push(dir, to);
        }
    }
    moves.sort_from(from);
    moves
}
