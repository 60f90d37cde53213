use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, init_logger, init_time_provider};
use crate::domain::page::PageContext;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};
use crate::log_info;

/// Module entry point: install logging, work out which page this is, mount it
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    init_logger(Box::new(ConsoleLogger::for_build()));
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    let pathname = gloo::utils::window()
        .location()
        .pathname()
        .unwrap_or_default();
    let page = PageContext::from_path(&pathname);
    let config = AppConfig::from_document();

    log_info!(
        LogComponent::Presentation("Initialize"),
        "Starting {page} (price API key {})",
        if config.polygon_api_key.is_empty() { "missing" } else { "present" }
    );

    mount_to_body(move || view! { <App page=page config=config/> });
}
