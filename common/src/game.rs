use serde::{Deserialize, Serialize};

use crate::{board::Board, square::Square};

pub const INIT_GAME_PATH: &str = "/init-game";
pub const MAKE_MOVE_PATH: &str = "/make-move";

/// Response body of both game endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub status: String,
    /// Whether the server accepted the last move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GameState {
    pub fn rejected(&self) -> bool {
        self.valid == Some(false)
    }
}

/// A move from one square to another. Legality is up to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

/// Request body for the make move endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

impl From<Move> for MoveRequest {
    fn from(m: Move) -> Self {
        MoveRequest {
            from_row: m.from.row(),
            from_col: m.from.col(),
            to_row: m.to.row(),
            to_col: m.to.col(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{board::Cell, piece::Piece};

    fn kings() -> Board {
        let mut board = Board::empty();
        board.set(Square::new(0, 4).unwrap(), Cell::Piece(Piece::BlackKing));
        board.set(Square::new(7, 4).unwrap(), Cell::Piece(Piece::WhiteKing));
        board
    }

    #[test]
    fn move_request_body() {
        let mv = Move {
            from: Square::new(6, 4).unwrap(),
            to: Square::new(4, 4).unwrap(),
        };
        let body = serde_json::to_string(&MoveRequest::from(mv)).unwrap();
        assert_eq!(body, r#"{"fromRow":6,"fromCol":4,"toRow":4,"toCol":4}"#);
    }

    #[test]
    fn init_response() {
        let json = format!(
            r#"{{"valid":true,"board":{},"status":"White's turn"}}"#,
            serde_json::to_string(&kings()).unwrap()
        );
        let state: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state.status, "White's turn");
        assert_eq!(state.board, kings());
        assert!(!state.rejected());
        assert_eq!(state.error, None);
    }

    #[test]
    fn rejected_move_response() {
        let json = format!(
            r#"{{"valid":false,"board":{},"status":"White's turn","error":"Illegal move"}}"#,
            serde_json::to_string(&kings()).unwrap()
        );
        let state: GameState = serde_json::from_str(&json).unwrap();
        assert!(state.rejected());
        assert_eq!(state.error.as_deref(), Some("Illegal move"));
    }

    #[test]
    fn minimal_response() {
        let mut board = Board::empty();
        board.set(Square::new(0, 0).unwrap(), Cell::Piece(Piece::WhiteKing));
        let json = format!(
            r#"{{"board":{},"status":"Checkmate"}}"#,
            serde_json::to_string(&board).unwrap()
        );
        let state: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state.valid, None);
        assert_eq!(state.board, board);
    }

    #[test]
    fn missing_fields_are_malformed() {
        assert!(serde_json::from_str::<GameState>(r#"{"status":"x"}"#).is_err());
        let json = format!(
            r#"{{"board":{}}}"#,
            serde_json::to_string(&Board::empty()).unwrap()
        );
        assert!(serde_json::from_str::<GameState>(&json).is_err());
    }
}
