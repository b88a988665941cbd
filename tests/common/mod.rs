//! Shared test fixtures

#![allow(dead_code)]

use std::cell::Cell;

use impact_map_wasm::{EngineError, LngLat, MapProjector, Poi, ScreenPoint, ViewportSize};

/// Projector that treats longitude/latitude as pixel x/y
///
/// Lets tests place markers at exact screen positions. Longitudes listed in
/// `failing` throw like a map that cannot project them.
pub struct PixelProjector {
    pub viewport: Cell<Option<ViewportSize>>,
    pub failing: Vec<f64>,
}

impl PixelProjector {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Cell::new(Some(ViewportSize { width, height })),
            failing: Vec::new(),
        }
    }

    pub fn unmeasured() -> Self {
        Self {
            viewport: Cell::new(None),
            failing: Vec::new(),
        }
    }

    pub fn failing_at(mut self, x: f64) -> Self {
        self.failing.push(x);
        self
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.viewport.set(Some(ViewportSize { width, height }));
    }
}

impl MapProjector for PixelProjector {
    fn project(&self, coordinate: LngLat) -> Result<ScreenPoint, EngineError> {
        if self.failing.contains(&coordinate.longitude) {
            return Err(EngineError::ProjectionUnavailable {
                longitude: coordinate.longitude,
                latitude: coordinate.latitude,
                reason: "map not loaded".to_string(),
            });
        }
        Ok(ScreenPoint::new(coordinate.longitude, coordinate.latitude))
    }

    fn viewport_size(&self) -> Option<ViewportSize> {
        self.viewport.get()
    }
}

/// POI `id` drawn at pixel `(x, y)` by `PixelProjector`
pub fn poi_at(id: i64, x: f64, y: f64) -> Poi {
    Poi::new(id, x, y)
}

/// `n` POIs spread along the middle row of an 1200x800 viewport
pub fn row_of_pois(n: i64) -> Vec<Poi> {
    (0..n).map(|i| poi_at(i + 1, 100.0 + 200.0 * i as f64, 400.0)).collect()
}
