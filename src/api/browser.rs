//! Browser resources released on drop
//!
//! Each handle owns the closure JavaScript calls back into. Dropping the
//! handle cancels the timer, frame or subscription first, so no callback can
//! fire into freed memory.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::map::MapLibreMap;

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No global window available"))
}

/// A `setInterval` timer
pub struct IntervalTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn start(period_ms: u32, callback: Closure<dyn FnMut()>) -> Result<Self, JsValue> {
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let handle = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        if let Ok(window) = window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// A pending `requestAnimationFrame` callback
pub struct AnimationFrame {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl AnimationFrame {
    pub fn request(callback: Closure<dyn FnMut()>) -> Result<Self, JsValue> {
        let handle = window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        // Cancelling a frame that already ran is a no-op
        if let Ok(window) = window() {
            let _ = window.cancel_animation_frame(self.handle);
        }
    }
}

/// One listener registered for several map events
pub struct MapSubscription {
    map: MapLibreMap,
    events: Vec<&'static str>,
    callback: Closure<dyn FnMut()>,
}

impl MapSubscription {
    pub fn listen(map: MapLibreMap, events: &[&'static str], callback: Closure<dyn FnMut()>) -> Self {
        let listener: &js_sys::Function = callback.as_ref().unchecked_ref();
        let events = events
            .iter()
            .copied()
            .filter(|event| map.subscribe(event, listener))
            .collect();
        Self { map, events, callback }
    }
}

impl Drop for MapSubscription {
    fn drop(&mut self) {
        let listener: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        for event in &self.events {
            self.map.unsubscribe(event, listener);
        }
    }
}
