//! Checklist Composer Frontend Entry Point

mod app;
mod bindings;
mod components;
mod config;
mod context;
mod editing;
mod export;
mod item_list;
mod models;
mod store;
mod workspace;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();
    let logs = rolling_logger::init(LoggerConfig::default());
    tracing::info!(buffered = logs.len(), "checklist composer starting");
    mount_to_body(App);
}
