pub mod board;

pub use board::{
    initial_position, CheckStatus, Color, Direction, Figure, MoveError, Moves, Piece, Position,
    Square,
};
