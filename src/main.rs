//! Task Board Frontend Entry Point

mod app;
mod board_view;
mod components;
mod context;
mod store;

use app::App;
use board_core::BoardConfig;
use leptos::prelude::*;
use log::LevelFilter;
use rolling_logger::LoggerConfig;

/// Board config bundled with the app
const BOARD_CONFIG: &str = include_str!("../board.json");

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(LoggerConfig {
        level: LevelFilter::Debug,
        ..LoggerConfig::default()
    }) {
        web_sys::console::warn_1(&format!("logger not installed: {}", err).into());
    }

    let config = load_config(BOARD_CONFIG);
    mount_to_body(move || view! { <App config=config /> });
}

fn load_config(json: &str) -> BoardConfig {
    match BoardConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("falling back to default board config: {}", err);
            BoardConfig::default()
        }
    }
}
