//! Site helpers exported to JavaScript
//!
//! Stateless functions the page calls around the map: the anchor heuristic on
//! its own, camera presets, breakpoint checks, counter formatting and the
//! WhatsApp contact links.

use wasm_bindgen::prelude::*;

use super::helpers::{serialize, to_js_error};
use crate::data::{default_cities, default_pois};
use crate::models::{MapSettings, ScreenPoint, ViewState, ViewportSize};
use crate::placement::resolve_anchor;
use crate::utils::breakpoint::{is_mobile_width, tooltip_max_width_px, window_width};
use crate::utils::format::{format_count, format_kilograms};
use crate::utils::whatsapp::random_whatsapp_url;

/// Anchor for a marker at `(x, y)` on a `width` x `height` map surface
///
/// Returns `"bottom"` when the surface has no measurable size.
#[wasm_bindgen(js_name = resolveAnchor)]
pub fn resolve_anchor_js(x: f64, y: f64, width: f64, height: f64) -> String {
    let anchor = match ViewportSize::measured(width, height) {
        Some(viewport) => resolve_anchor(ScreenPoint::new(x, y), viewport),
        None => Default::default(),
    };
    anchor.as_str().to_string()
}

/// The embedded city dataset
#[wasm_bindgen(js_name = defaultCities)]
pub fn default_cities_js() -> Result<JsValue, JsValue> {
    serialize(default_cities(), "Failed to serialize cities")
}

/// The embedded city dataset as engine POIs
#[wasm_bindgen(js_name = defaultPois)]
pub fn default_pois_js() -> Result<JsValue, JsValue> {
    serialize(&default_pois(), "Failed to serialize POIs")
}

#[wasm_bindgen(js_name = initialViewState)]
pub fn initial_view_state(is_mobile: bool) -> Result<JsValue, JsValue> {
    serialize(&ViewState::for_layout(is_mobile), "Failed to serialize view state")
}

#[wasm_bindgen(js_name = mapSettings)]
pub fn map_settings() -> Result<JsValue, JsValue> {
    serialize(&MapSettings::default(), "Failed to serialize map settings")
}

/// Whether the browser window is below the mobile breakpoint
#[wasm_bindgen(js_name = isMobileViewport)]
pub fn is_mobile_viewport() -> bool {
    window_width().map(is_mobile_width).unwrap_or(false)
}

#[wasm_bindgen(js_name = isMobileWidth)]
pub fn is_mobile_width_js(width: f64) -> bool {
    is_mobile_width(width)
}

#[wasm_bindgen(js_name = tooltipMaxWidth)]
pub fn tooltip_max_width(is_mobile: bool) -> u32 {
    tooltip_max_width_px(is_mobile)
}

/// Format a counter with pt-BR thousands separators
///
/// Negative and non-finite inputs format as `0`.
#[wasm_bindgen(js_name = formatCount)]
pub fn format_count_js(value: f64) -> String {
    format_count(counter_from_js(value))
}

#[wasm_bindgen(js_name = formatKilograms)]
pub fn format_kilograms_js(value: f64) -> String {
    format_kilograms(counter_from_js(value))
}

fn counter_from_js(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    }
}

#[wasm_bindgen(js_name = randomWhatsAppUrl)]
pub fn random_whatsapp_url_js() -> String {
    random_whatsapp_url()
}

/// Open a WhatsApp chat with a random team number in a new tab
#[wasm_bindgen(js_name = openWhatsApp)]
pub fn open_whatsapp() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| to_js_error("No global window available"))?;
    let url = random_whatsapp_url();
    window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer")?;
    Ok(())
}
