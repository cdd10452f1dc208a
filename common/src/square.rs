use std::fmt;

pub const BOARD_SIZE: u8 = 8;

/// A square on the board, row 0 is the top row as displayed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Square {
    row: u8,
    col: u8,
}

/// The color of the square itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shade {
    Light,
    Dark,
}

impl Square {
    /// Returns `None` if either coordinate is off the board.
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(Square { row, col })
    }

    /// All squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    pub const fn shade(self) -> Shade {
        if (self.row + self.col) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_is_row_major() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Square::new(0, 0).unwrap());
        assert_eq!(all[1], Square::new(0, 1).unwrap());
        assert_eq!(all[8], Square::new(1, 0).unwrap());
        assert_eq!(all[63], Square::new(7, 7).unwrap());
    }

    #[test]
    fn out_of_range() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::new(7, 7).is_some());
    }

    #[test]
    fn shade_alternates() {
        for sq in Square::all() {
            let expected = if (sq.row() + sq.col()) % 2 == 0 {
                Shade::Light
            } else {
                Shade::Dark
            };
            assert_eq!(sq.shade(), expected);
        }
        assert_eq!(Square::new(0, 0).unwrap().shade(), Shade::Light);
        assert_eq!(Square::new(7, 0).unwrap().shade(), Shade::Dark);
    }
}
