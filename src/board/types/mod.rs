//! Core board types.
//!
//! This module contains the value types shared by the rules engine:
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - (rank, file) coordinate with its `"<rank>-<file>"` key
//! - `Direction` - the eight rays used to bucket moves
//! - `Moves` - destination squares grouped by direction

mod direction;
mod moves;
mod piece;
mod square;

pub use direction::Direction;
pub use moves::Moves;
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;
