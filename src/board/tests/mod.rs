//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scenarios.rs` - Positions from play: checks, pins, en passant, mates
//! - `edge_cases.rs` - Special positions and edge cases
//! - `perft.rs` - Move counts against reference perft values
//! - `proptest.rs` - Property-based tests over random games


use crate::board::{Color, Direction, Piece, Position, Square, PROMOTION_PIECES};

/// Play a sequence of `(from, to)` moves from the initial position.
pub(super) fn play(moves: &[((usize, usize), (usize, usize))]) -> Position {
    let mut pos = Position::initial();
    for &((fr, ff), (tr, tf)) in moves {
        pos = pos
            .apply_move(Square(fr, ff), Square(tr, tf), None)
            .unwrap_or_else(|err| panic!("move {fr}-{ff} -> {tr}-{tf} rejected: {err}"));
    }
    pos
}

/// Every successor of `pos`, with each promotion expanded to all four choices.
pub(super) fn successors(pos: &Position) -> Vec<Position> {
    let mut out = Vec::new();
    for (from, to) in pos.walk_move_pairs() {
        if pos.is_promotion(from, to) {
            for piece in PROMOTION_PIECES {
                out.push(pos.apply_move(from, to, Some(piece)).unwrap());
            }
        } else {
            out.push(pos.apply_move(from, to, None).unwrap());
        }
    }
    out
}

/// Brute-force attack test: walks rays and knight jumps outward from `square`
/// looking for an enemy of `color`, without consulting any cached move sets.
pub(super) fn attacked_by_scan(pos: &Position, square: Square, color: Color) -> bool {
    let enemy = color.opponent();
    for dir in Direction::ALL {
        let (d_rank, d_file) = dir.step();
        let mut current = square;
        let mut steps = 0;
        while let Some(next) = current.offset(d_rank, d_file) {
            steps += 1;
            if let Some(fig) = pos.figure_at(next) {
                if fig.color() == enemy {
                    let hits = match fig.piece() {
                        Piece::Queen => true,
                        Piece::Rook => dir.is_straight(),
                        Piece::Bishop => dir.is_diagonal(),
                        Piece::King => steps == 1,
                        Piece::Pawn => {
                            steps == 1 && dir.is_diagonal() && d_rank == -enemy.pawn_direction()
                        }
                        Piece::Knight => false,
                    };
                    if hits {
                        return true;
                    }
                }
                break;
            }
            current = next;
        }
    }
    const JUMPS: [(isize, isize); 8] = [
        (-2, -1),
        (-2, 1),
        (-1, -2),
        (-1, 2),
        (1, -2),
        (1, 2),
        (2, -1),
        (2, 1),
    ];
    JUMPS.iter().any(|&(dr, df)| {
        square
            .offset(dr, df)
            .and_then(|sq| pos.figure_at(sq))
            .is_some_and(|fig| fig.color() == enemy && fig.piece() == Piece::Knight)
    })
}

/// Whether `color`'s king stands attacked, by brute force.
pub(super) fn king_in_danger(pos: &Position, color: Color) -> bool {
    pos.king_square(color)
        .is_some_and(|king| attacked_by_scan(pos, king, color))
}
