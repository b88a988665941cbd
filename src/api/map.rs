//! MapLibre bindings
//!
//! The page creates and owns the MapLibre `Map`; it hands the instance to the
//! engine, which only calls `project`, `loaded`, `getContainer`, `on` and
//! `off` on it. Every call is `catch`ed: a map that throws degrades the
//! placement, it never panics the module.

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::helpers::describe_js_error;
use crate::error::EngineError;
use crate::models::{LngLat, ScreenPoint, ViewportSize};
use crate::placement::MapProjector;

/// Map events that invalidate the anchor map: camera moves (pan, zoom,
/// rotate, pitch), container resizes, and the initial load
pub const MAP_CHANGE_EVENTS: [&str; 3] = ["move", "resize", "load"];

#[wasm_bindgen]
extern "C" {
    /// A MapLibre GL `Map` instance
    #[wasm_bindgen(typescript_type = "import('maplibre-gl').Map")]
    #[derive(Clone, Debug)]
    pub type MapLibreMap;

    #[wasm_bindgen(method, catch)]
    fn project(this: &MapLibreMap, lng_lat: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn loaded(this: &MapLibreMap) -> Result<bool, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getContainer)]
    fn get_container(this: &MapLibreMap) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn on(this: &MapLibreMap, event: &str, listener: &js_sys::Function) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn off(this: &MapLibreMap, event: &str, listener: &js_sys::Function) -> Result<JsValue, JsValue>;
}

impl MapLibreMap {
    /// Register `listener` for `event`, logging failures
    pub fn subscribe(&self, event: &str, listener: &js_sys::Function) -> bool {
        match self.on(event, listener) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("Could not subscribe to map '{}' events: {}", event, describe_js_error(&err));
                false
            }
        }
    }

    /// Remove `listener` from `event`; errors are logged and ignored
    pub fn unsubscribe(&self, event: &str, listener: &js_sys::Function) {
        if let Err(err) = self.off(event, listener) {
            log::debug!("Could not unsubscribe from map '{}' events: {}", event, describe_js_error(&err));
        }
    }
}

/// `MapProjector` backed by a live MapLibre map
#[derive(Clone, Debug)]
pub struct JsMapProjector {
    map: MapLibreMap,
}

impl JsMapProjector {
    pub fn new(map: MapLibreMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &MapLibreMap {
        &self.map
    }

    fn is_loaded(&self) -> bool {
        self.map.loaded().unwrap_or(false)
    }

    fn unavailable(coordinate: LngLat, reason: impl Into<String>) -> EngineError {
        EngineError::ProjectionUnavailable {
            longitude: coordinate.longitude,
            latitude: coordinate.latitude,
            reason: reason.into(),
        }
    }
}

/// Read a numeric property off a plain JS object
fn number_field(value: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(value, &JsValue::from_str(key)).ok()?.as_f64()
}

impl MapProjector for JsMapProjector {
    fn project(&self, coordinate: LngLat) -> Result<ScreenPoint, EngineError> {
        if !self.is_loaded() {
            return Err(Self::unavailable(coordinate, "map not loaded"));
        }

        let lng_lat = Array::of2(
            &JsValue::from_f64(coordinate.longitude),
            &JsValue::from_f64(coordinate.latitude),
        );
        let projected = self
            .map
            .project(&lng_lat)
            .map_err(|err| Self::unavailable(coordinate, describe_js_error(&err)))?;

        match (number_field(&projected, "x"), number_field(&projected, "y")) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(ScreenPoint::new(x, y)),
            _ => Err(Self::unavailable(coordinate, "projection returned no finite point")),
        }
    }

    fn viewport_size(&self) -> Option<ViewportSize> {
        if !self.is_loaded() {
            return None;
        }

        let container = self.map.get_container().ok()?.dyn_into::<web_sys::Element>().ok()?;
        let rect = container.get_bounding_client_rect();
        ViewportSize::measured(rect.width(), rect.height())
    }
}
