use common::{Move, Square};

/// Two click move input.
///
/// The first click on a square holding a piece selects it, the next click on
/// any square, the selected one included, produces a move and resets.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(Square),
}

impl Selection {
    pub fn selected(self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected(x) => Some(x),
        }
    }

    pub fn click(&mut self, square: Square, selectable: bool) -> Option<Move> {
        match *self {
            Selection::Idle => {
                if selectable {
                    *self = Selection::Selected(square);
                }
                None
            }
            Selection::Selected(from) => {
                *self = Selection::Idle;
                Some(Move { from, to: square })
            }
        }
    }
}
