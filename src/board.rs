use common::{Board, Cell, Move, Player, Shade, Square};
use sycamore::prelude::*;

use crate::{
    config::Config,
    game::{self, GameContext},
    selection::Selection,
};

fn square_class(square: Square, selected: bool) -> String {
    let shade = match square.shade() {
        Shade::Light => "white",
        Shade::Dark => "black",
    };
    if selected {
        format!("square {shade} selected")
    } else {
        format!("square {shade}")
    }
}

fn piece_class(player: Player) -> &'static str {
    match player {
        Player::White => "white-piece",
        Player::Black => "black-piece",
    }
}

fn view_piece<G: Html>(cx: Scope, cell: Cell) -> View<G> {
    let Some(player) = cell.player() else {
        return view! { cx, };
    };
    let glyph = cell.glyph().map(String::from).unwrap_or_default();

    view! { cx,
        span(class=piece_class(player)){ (glyph) }
    }
}

/// Feeds a click into the selection. Only squares showing a glyph can be
/// picked up, nothing can be picked up before the first board arrives.
fn click(board: Option<&Board>, selection: &mut Selection, square: Square) -> Option<Move> {
    let selectable = board.map_or(false, |b| b.get(square).glyph().is_some());
    selection.click(square, selectable)
}

/// Builds all 64 squares from scratch.
fn view_squares<'a, G: Html, F>(
    cx: Scope<'a>,
    board: &Board,
    selection: &'a Signal<Selection>,
    on_square: F,
) -> View<G>
where
    F: Fn(Square) + Copy + 'a,
{
    let squares = board
        .iter()
        .map(move |(square, cell)| {
            let class = move || square_class(square, selection.get().selected() == Some(square));

            view! { cx,
                div(class=class(),
                    data-row=square.row().to_string(),
                    data-col=square.col().to_string(),
                    on:click=move |_| on_square(square)){
                    (view_piece(cx, cell))
                }
            }
        })
        .collect();

    View::new_fragment(squares)
}

/// The board as last reported by the server.
///
/// Clicking squares drives the move selection, a completed selection is sent
/// to the server.
#[component]
pub fn Chessboard<G: Html>(cx: Scope) -> View<G> {
    let ctx = use_context::<GameContext>(cx);
    let config = use_context::<Config>(cx);
    let selection = create_signal(cx, Selection::Idle);

    let on_square = move |square: Square| {
        let board = ctx.board.get_untracked();
        let mv = click((*board).as_ref(), &mut selection.modify(), square);
        if let Some(mv) = mv {
            game::make_move(ctx, config, mv);
        }
    };

    view! { cx,
        div(id="chessboard", class="chessboard"){
            ({
                let board = ctx.board.get();
                match &*board {
                    Some(board) => view_squares(cx, board, selection, on_square),
                    None => view! { cx, },
                }
            })
        }
    }
}
