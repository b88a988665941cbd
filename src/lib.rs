//! Impact Map WASM Module
//!
//! Browser-side logic for the recycling network's impact map: the tooltip
//! placement heuristic, the rotating highlight that cycles through the cities,
//! and the small site helpers around them. The page keeps ownership of the
//! MapLibre map and hands it to `TooltipEngine`.

pub mod api;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod placement;
pub mod utils;

// Re-export commonly used types
pub use config::EngineConfig;
pub use engine::{EngineEvent, EngineUpdate, PendingAnchors, Session, TooltipEngine};
pub use error::{DataError, EngineError};
pub use models::*;
pub use placement::{resolve_anchor, resolve_batch, AnchorMap, MapProjector};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    init_panic_hook();
    init_logging();

    log::info!("Impact map WASM module initialized");
}

#[cfg(feature = "console_error_panic_hook")]
fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(not(feature = "console_error_panic_hook"))]
fn init_panic_hook() {}

#[cfg(feature = "console_log")]
fn init_logging() {
    // A second initialization (module re-instantiated by a hot reload) keeps
    // the logger that is already installed
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("[WASM] logger already initialized"));
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
