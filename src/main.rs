//! Org Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filters;
mod listing;
mod models;
mod mutations;
mod notify;
mod options;
mod pagination;
mod query;
mod store;
mod tree;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    let (level, level_error) = match config.log.level_filter() {
        Ok(level) => (level, None),
        Err(err) => (LevelFilter::Info, Some(err)),
    };

    let logger = match console_logger::init(level) {
        Ok(logger) => Some(logger),
        Err(err) => {
            web_sys::console::error_1(&format!("[MAIN] logger init failed: {}", err).into());
            None
        }
    };
    if let Some(err) = config_error {
        log::warn!("[MAIN] using default config: {}", err);
    }
    if let Some(err) = level_error {
        log::warn!("[MAIN] {}; logging at info", err);
    }
    log::info!("[MAIN] API at {}", config.api.base_url);

    mount_to_body(move || view! { <App config=config.clone() logger=logger /> });
}
