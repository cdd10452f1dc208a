use common::{Board, GameState, Move};
use log::{debug, error, info, warn};
use sycamore::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::{
    api::{self, RequestError},
    app::{ActivePage, Navigator},
    board::Chessboard,
    config::Config,
    status::Status,
};

/// Board and status as last reported by the server.
///
/// Lives as long as the page so a request which resolves after the game view
/// was left still lands here.
#[derive(Clone)]
pub struct GameContext {
    pub board: RcSignal<Option<Board>>,
    pub status: RcSignal<String>,
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GameContext {
    pub fn new() -> Self {
        GameContext {
            board: create_rc_signal(None),
            status: create_rc_signal(String::new()),
        }
    }

    pub fn apply(&self, state: GameState) {
        if state.rejected() {
            warn!(
                "server rejected move: {}",
                state.error.as_deref().unwrap_or("no reason given")
            );
        }
        self.board.set(Some(state.board));
        self.status.set(state.status);
    }

    /// Applies the result of a request, failures only get logged.
    pub fn settle(&self, operation: &str, result: Result<GameState, RequestError>) -> bool {
        match result {
            Ok(state) => {
                self.apply(state);
                true
            }
            Err(e) => {
                error!("failed to {operation}: {e}");
                false
            }
        }
    }
}

/// Loads the initial board. Not cancelled by leaving the game view, the last
/// request to resolve wins.
pub fn initialize(ctx: &GameContext, config: &Config) {
    info!("initializing game");
    let ctx = ctx.clone();
    let config = config.clone();
    spawn_local(async move {
        let result = api::fetch_initial_state(&config).await;
        ctx.settle("initialize game", result);
    });
}

pub fn make_move(ctx: &GameContext, config: &Config, mv: Move) {
    debug!("move {} -> {}", mv.from, mv.to);
    let ctx = ctx.clone();
    let config = config.clone();
    spawn_local(async move {
        let result = api::submit_move(&config, mv).await;
        ctx.settle("make move", result);
    });
}

/// The game view, mounting it starts a new game.
#[component]
pub fn Game<G: Html>(cx: Scope) -> View<G> {
    let ctx = use_context::<GameContext>(cx);
    let config = use_context::<Config>(cx);
    let navigator = use_context::<Navigator>(cx);

    initialize(ctx, config);

    view! { cx,
        div(id="game", class="game"){
            div(class="game-header"){
                button(id="back-btn", class="btn", on:click=move |_| navigator.navigate(config, ActivePage::Landing)){ "Back" }
                Status {}
            }
            Chessboard {}
        }
    }
}
