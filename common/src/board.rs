use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    piece::{Piece, Player},
    square::{Square, BOARD_SIZE},
};

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    #[error("expected a single piece code, found `{0}`")]
    TooLong(String),
}

/// The content of a single square as sent by the server.
///
/// The server sends either `null`, an empty string or a single piece code.
/// Codes which are not in the piece table are kept as [`Cell::Unknown`], they
/// occupy the square but have no glyph.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "Option<String>")]
pub enum Cell {
    #[default]
    Empty,
    Piece(Piece),
    Unknown(char),
}

impl Cell {
    pub fn from_char(c: char) -> Self {
        Piece::from_char(c)
            .map(Cell::Piece)
            .unwrap_or(Cell::Unknown(c))
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Piece(p) => Some(p),
            _ => None,
        }
    }

    /// The side the cell belongs to, derived from the letter case.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Piece(p) => Some(p.player()),
            Cell::Unknown(c) => Some(Player::from_case(c)),
        }
    }

    pub fn glyph(self) -> Option<char> {
        self.piece().map(Piece::glyph)
    }
}

impl TryFrom<Option<String>> for Cell {
    type Error = CellError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        let Some(value) = value else {
            return Ok(Cell::Empty);
        };
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Cell::Empty),
            (Some(c), None) => Ok(Cell::from_char(c)),
            (Some(_), Some(_)) => Err(CellError::TooLong(value)),
        }
    }
}

impl From<Cell> for Option<String> {
    fn from(value: Cell) -> Self {
        match value {
            Cell::Empty => Some(String::new()),
            Cell::Piece(p) => Some(p.to_char().to_string()),
            Cell::Unknown(c) => Some(c.to_string()),
        }
    }
}

/// A full 8x8 snapshot of the board. Row 0 is the top row.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            rows: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Cell {
        self.rows[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.rows[square.row() as usize][square.col() as usize] = cell;
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all().map(move |s| (s, self.get(s)))
    }
}
