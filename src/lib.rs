pub mod api;
pub mod auth;
#[cfg(target_arch = "wasm32")]
mod bindings;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError, ApiResponse};
pub use auth::{Session, SessionStore, DEMO_TOKEN};
pub use config::ClientConfig;

/// WASM entry point - called when the WASM module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting energy monitor client");
}
