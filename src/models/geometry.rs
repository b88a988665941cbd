//! Screen and geographic coordinate types

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LngLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LngLat {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

/// Pixel position relative to the top-left corner of the map surface
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pixel size of the map rendering surface
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    /// Build a viewport size, rejecting surfaces that cannot be measured yet
    ///
    /// A container that has not been laid out reports zero (or NaN) dimensions;
    /// anchors computed against it would be meaningless.
    pub fn measured(width: f64, height: f64) -> Option<Self> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(width) && usable(height) {
            Some(Self { width, height })
        } else {
            None
        }
    }
}
