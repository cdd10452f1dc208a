use std::fmt::{self, Write};

/// The side a piece belongs to.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The side of a piece code. Lowercase is black, everything else,
    /// including codes without case, is white.
    pub fn from_case(c: char) -> Self {
        if !c.is_lowercase() {
            Player::White
        } else {
            Player::Black
        }
    }
}

/// All the possible pieces on the board
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Piece {
    WhiteKing,
    BlackKing,

    WhitePawn,
    BlackPawn,

    WhiteBishop,
    BlackBishop,

    WhiteKnight,
    BlackKnight,

    WhiteRook,
    BlackRook,

    WhiteQueen,
    BlackQueen,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.to_char())
    }
}

impl Piece {
    pub const ALL: [Piece; 12] = [
        Piece::WhiteKing,
        Piece::BlackKing,
        Piece::WhitePawn,
        Piece::BlackPawn,
        Piece::WhiteBishop,
        Piece::BlackBishop,
        Piece::WhiteKnight,
        Piece::BlackKnight,
        Piece::WhiteRook,
        Piece::BlackRook,
        Piece::WhiteQueen,
        Piece::BlackQueen,
    ];

    pub const fn player(self) -> Player {
        match self {
            Piece::WhiteKing
            | Piece::WhitePawn
            | Piece::WhiteBishop
            | Piece::WhiteKnight
            | Piece::WhiteRook
            | Piece::WhiteQueen => Player::White,
            _ => Player::Black,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Piece::WhiteKing => 'K',
            Piece::BlackKing => 'k',
            Piece::WhiteQueen => 'Q',
            Piece::BlackQueen => 'q',
            Piece::WhiteRook => 'R',
            Piece::BlackRook => 'r',
            Piece::WhiteBishop => 'B',
            Piece::BlackBishop => 'b',
            Piece::WhiteKnight => 'N',
            Piece::BlackKnight => 'n',
            Piece::WhitePawn => 'P',
            Piece::BlackPawn => 'p',
        }
    }

    /// Piece codes are case sensitive.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(Piece::WhiteKing),
            'k' => Some(Piece::BlackKing),
            'Q' => Some(Piece::WhiteQueen),
            'q' => Some(Piece::BlackQueen),
            'R' => Some(Piece::WhiteRook),
            'r' => Some(Piece::BlackRook),
            'B' => Some(Piece::WhiteBishop),
            'b' => Some(Piece::BlackBishop),
            'N' => Some(Piece::WhiteKnight),
            'n' => Some(Piece::BlackKnight),
            'P' => Some(Piece::WhitePawn),
            'p' => Some(Piece::BlackPawn),
            _ => None,
        }
    }

    /// The unicode chess symbol used to display the piece.
    pub const fn glyph(self) -> char {
        match self {
            Piece::WhiteKing => '♔',
            Piece::BlackKing => '♚',
            Piece::WhiteQueen => '♕',
            Piece::BlackQueen => '♛',
            Piece::WhiteRook => '♖',
            Piece::BlackRook => '♜',
            Piece::WhiteBishop => '♗',
            Piece::BlackBishop => '♝',
            Piece::WhiteKnight => '♘',
            Piece::BlackKnight => '♞',
            Piece::WhitePawn => '♙',
            Piece::BlackPawn => '♟',
        }
    }
}
