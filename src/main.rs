//! Techblog Frontend Entry Point

mod api;
mod app;
mod cache;
mod components;
mod config;
mod context;
mod drafts;
mod error;
mod grid;
mod layout_editor;
mod models;
mod mutations;
mod shortcuts;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(err) = rolling_logger::init(config.log_capacity, config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("[APP] Starting against {}", config.api_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
