//! Projection collaborator contract
//!
//! The map library owns the camera. The placement code only needs two
//! questions answered: where does a coordinate land on screen, and how big is
//! the screen. Browser code answers them with a MapLibre handle, tests with
//! synthetic geometry.

use crate::error::EngineError;
use crate::models::{LngLat, ScreenPoint, ViewportSize};

pub trait MapProjector {
    /// Convert a geographic coordinate to viewport pixels
    ///
    /// Fails with `EngineError::ProjectionUnavailable` when the map cannot
    /// answer (not loaded yet, point off-world).
    fn project(&self, coordinate: LngLat) -> Result<ScreenPoint, EngineError>;

    /// Current size of the rendering surface, `None` until it can be measured
    fn viewport_size(&self) -> Option<ViewportSize>;
}

impl<P: MapProjector + ?Sized> MapProjector for &P {
    fn project(&self, coordinate: LngLat) -> Result<ScreenPoint, EngineError> {
        (**self).project(coordinate)
    }

    fn viewport_size(&self) -> Option<ViewportSize> {
        (**self).viewport_size()
    }
}

/// Plain linear projection: longitude/latitude degrees scaled around a center
///
/// Not a map projection anyone should render with, but it gives tests and
/// headless callers a deterministic collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearProjector {
    pub center: LngLat,
    pub pixels_per_degree: f64,
    pub viewport: Option<ViewportSize>,
}

impl LinearProjector {
    pub fn new(center: LngLat, pixels_per_degree: f64, viewport: ViewportSize) -> Self {
        Self {
            center,
            pixels_per_degree,
            viewport: Some(viewport),
        }
    }
}

impl MapProjector for LinearProjector {
    fn project(&self, coordinate: LngLat) -> Result<ScreenPoint, EngineError> {
        let viewport = self.viewport.ok_or_else(|| EngineError::ProjectionUnavailable {
            longitude: coordinate.longitude,
            latitude: coordinate.latitude,
            reason: "viewport not measured".to_string(),
        })?;

        // Screen y grows downward while latitude grows northward
        let point = ScreenPoint::new(
            viewport.width / 2.0 + (coordinate.longitude - self.center.longitude) * self.pixels_per_degree,
            viewport.height / 2.0 - (coordinate.latitude - self.center.latitude) * self.pixels_per_degree,
        );

        if point.is_finite() {
            Ok(point)
        } else {
            Err(EngineError::ProjectionUnavailable {
                longitude: coordinate.longitude,
                latitude: coordinate.latitude,
                reason: "non-finite pixel position".to_string(),
            })
        }
    }

    fn viewport_size(&self) -> Option<ViewportSize> {
        self.viewport
    }
}
