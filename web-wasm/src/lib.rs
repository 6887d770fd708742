//! Image Insight Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod file_reader;
mod logging;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    leptos::mount::mount_to_body(app::App);
}
