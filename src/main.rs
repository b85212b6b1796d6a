//! ProjPlanning Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod listing;
mod models;
mod pages;
mod routes;
mod store;
mod tasks;

use app::App;
use leptos::prelude::*;
use tracing::info;

fn main() {
    console_error_panic_hook::set_once();
    let log = match console_logger::init(config::log_level(), config::LOG_BUFFER_LINES) {
        Ok(buffer) => {
            info!("[APP] Logger ready, API at {}", config::api_base());
            Some(buffer)
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] Logger setup failed: {}", e).into());
            None
        }
    };
    mount_to_body(move || view! { <App log=log /> });
}
