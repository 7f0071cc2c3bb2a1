//! Cards Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod logging;
mod models;
mod view_model;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = ApiConfig::from_env();
    logging::init_logging(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
