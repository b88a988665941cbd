//! Shared helpers for WASM API operations
//!
//! Serialization, deserialization and error conversion used by every
//! JavaScript-facing function. Failures are logged before they are handed to
//! JavaScript so they show up in the console even if the caller swallows them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| to_js_error(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
///
/// Uses the JSON-compatible serializer so maps become plain objects and
/// `None` becomes `null`, which is what the page's components expect.
pub fn serialize<T: Serialize + ?Sized>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| to_js_error(format!("{}: {}", error_context, e)))
}

/// Log an error and convert it to a JsValue
pub fn to_js_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Render a thrown JavaScript value for log messages
pub fn describe_js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Invoke an optional JavaScript callback, logging (not propagating) throws
pub fn notify(listener: Option<js_sys::Function>) {
    if let Some(listener) = listener {
        if let Err(err) = listener.call0(&JsValue::NULL) {
            log::warn!("Change listener threw: {}", describe_js_error(&err));
        }
    }
}
