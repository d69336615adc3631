//! Chess position representation and move legality.
//!
//! Every figure carries its default (shape-legal) moves, its walk moves
//! (where it may go this ply) and its attack moves (squares it threatens).
//! Legality covers occupancy, line-of-sight blocking, checks, absolute pins
//! and en passant. Castling is not generated.
//!
//! # Example
//! ```
//! use chess_legality::board::{Position, Square};
//!
//! let position = Position::initial();
//! let pawn = position.legal_walk_moves(Square(6, 4)).unwrap();
//! assert!(pawn.contains(Square(4, 4)));
//! ```

mod builder;
mod error;
mod fen;
mod figure;
mod make_move;
mod perft;
pub mod movegen;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use figure::Figure;
pub use state::{initial_position, HistoryEntry, Position};
pub use status::CheckStatus;
pub use types::{Color, Direction, Moves, Piece, Square, PROMOTION_PIECES};

// Legality building blocks for callers that inspect positions directly
pub use movegen::geometry::{default_moves, shape_legal};
pub use movegen::{between, detect_checks, detect_pins, CheckInfo, PinInfo};
