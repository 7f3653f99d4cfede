pub mod app;
pub mod domain;
pub mod shared;

use shared::config;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = config::load_config();
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level())
        .unwrap_or(log::Level::Debug);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    match loaded {
        Ok(c) => config::install(c),
        Err(e) => log::error!("Invalid embedded config, using defaults: {}", e),
    }

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
