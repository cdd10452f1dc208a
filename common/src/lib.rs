pub mod board;
pub mod game;
pub mod piece;
pub mod square;

pub use board::{Board, Cell};
pub use game::{GameState, Move, MoveRequest};
pub use piece::{Piece, Player};
pub use square::{Shade, Square};
