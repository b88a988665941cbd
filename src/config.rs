//! Engine configuration
//!
//! Every field has a default, so the page may pass `undefined`, `{}` or a
//! partial object to the `TooltipEngine` constructor.

use serde::{Deserialize, Serialize};

use crate::engine::rotation::ROTATION_INTERVAL_MS;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Milliseconds between highlight changes
    pub rotation_interval_ms: u32,

    /// Apply recomputed anchors on the next animation frame instead of inside
    /// the map's change callback
    pub defer_to_animation_frame: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: ROTATION_INTERVAL_MS,
            defer_to_animation_frame: true,
        }
    }
}

impl EngineConfig {
    /// Interval actually handed to the timer; a zero interval would spin
    pub fn effective_interval_ms(&self) -> u32 {
        if self.rotation_interval_ms == 0 {
            log::warn!(
                "rotationIntervalMs of 0 ignored, using {}ms",
                ROTATION_INTERVAL_MS
            );
            ROTATION_INTERVAL_MS
        } else {
            self.rotation_interval_ms
        }
    }
}
