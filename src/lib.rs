use leptos::{mount_to_body, view};
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::App;
use crate::config::AppConfig;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

/// Entry point: wires logging, loads the config and mounts the app.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    let config = AppConfig::load();
    log_info!(LogComponent::Presentation("Initialize"), "mounting dashboard");
    mount_to_body(move || view! { <App config=config/> });
}
