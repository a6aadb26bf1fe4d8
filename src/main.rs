//! Gear Catalog Frontend Entry Point

mod app;
mod commands;
mod components;
mod storage;
mod store;

use app::App;
use gear_catalog_core::Config;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
    log::info!("Backend at {}", Config::from_build_env().api_base_url);
    mount_to_body(App);
}
