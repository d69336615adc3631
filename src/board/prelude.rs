//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_legality::board::prelude::*;
//!
//! let status = Position::initial().check_status();
//! assert_eq!(status.side, Color::White);
//! ```

pub use super::{
    initial_position, CheckStatus, Color, Direction, FenError, Figure, MoveError, Moves, Piece,
    Position, PositionBuilder, Square, SquareError,
};
