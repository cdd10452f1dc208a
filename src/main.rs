#![allow(non_snake_case)]

use log::info;
use sycamore::prelude::*;

mod api;
mod app;
mod board;
mod config;
#[cfg(test)]
mod fixtures;
mod game;
mod selection;
mod status;

use app::App;
use config::Config;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = Config::default();
    info!("starting, game server at {}", config.server);

    sycamore::render(|cx| {
        provide_context(cx, config);
        view! { cx, App {} }
    });
}
