//! Impact map WASM API
//!
//! The JavaScript-facing surface of the module.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, error conversion and listener notification
//! - `map`: MapLibre bindings and the browser `MapProjector`
//! - `browser`: interval timers, animation frames and map subscriptions that
//!   release themselves on drop
//! - `engine`: the `TooltipEngine` class
//! - `site`: stateless helpers (presets, breakpoints, formatting, WhatsApp)

pub mod browser;
pub mod engine;
pub mod helpers;
pub mod map;
pub mod site;

pub use engine::TooltipEngineHandle;
pub use map::{JsMapProjector, MapLibreMap};
pub use site::*;
