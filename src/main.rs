//! My Todo's Frontend Entry Point

mod models;
mod error;
mod config;
mod todos;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = UiConfig::load();
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::error_1(&format!("[APP] logger init failed: {}", e).into());
    }
    log::info!("[APP] starting, blank submissions: {:?}", config.blank_submissions);

    mount_to_body(move || view! { <App config=config /> });
}
