use common::{
    game::{INIT_GAME_PATH, MAKE_MOVE_PATH},
    GameState, Move, MoveRequest,
};
use gloo_net::http;
use log::debug;

use crate::config::Config;

/// Everything that can go wrong talking to the game server.
///
/// The ui treats all of them the same: the failure is logged and nothing
/// on screen changes.
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("could not reach the game server: {0}")]
    Network(#[source] gloo_net::Error),
    #[error("recieved status {status}, {text}")]
    Status { status: u16, text: String },
    #[error("server returned an unexpected response: {0}")]
    Malformed(#[source] gloo_net::Error),
    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Fetches the board and status of a fresh game.
pub async fn fetch_initial_state(config: &Config) -> Result<GameState, RequestError> {
    let url = config.endpoint(INIT_GAME_PATH);
    debug!("GET {url}");

    let req = http::Request::new(&url).method(http::Method::GET);
    send(req).await
}

/// Submits a move, the server decides whether it is legal.
pub async fn submit_move(config: &Config, mv: Move) -> Result<GameState, RequestError> {
    let url = config.endpoint(MAKE_MOVE_PATH);
    let body = serde_json::to_string(&MoveRequest::from(mv))?;
    debug!("POST {url} {body}");

    let req = http::Request::new(&url)
        .method(http::Method::POST)
        .header("Content-Type", "application/json")
        .body(body);
    send(req).await
}

async fn send(req: http::Request) -> Result<GameState, RequestError> {
    let resp = req.send().await.map_err(RequestError::Network)?;

    if !resp.ok() {
        return Err(RequestError::Status {
            status: resp.status(),
            text: resp.status_text(),
        });
    }

    resp.json::<GameState>()
        .await
        .map_err(RequestError::Malformed)
}
