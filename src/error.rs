//! Error types for the tooltip engine
//!
//! None of these are fatal to the page. Each variant maps to a degraded
//! behavior: a `bottom` anchor, a skipped recomputation pass, or an idle
//! rotation timer.

use thiserror::Error;

/// Engine-level failures reported by the projection collaborator or the
/// lifecycle calls
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The map could not convert a coordinate to pixels (not loaded yet,
    /// point off-world, non-finite result)
    #[error("Projection unavailable for ({longitude}, {latitude}): {reason}")]
    ProjectionUnavailable {
        longitude: f64,
        latitude: f64,
        reason: String,
    },

    /// The rendering surface has no measurable size yet
    #[error("Viewport size is not measurable yet")]
    ViewportUnavailable,

    /// `start` was called without any points of interest
    #[error("No points of interest to rotate through")]
    EmptyPoiSet,
}

/// Failures loading the data files embedded in the module
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Embedded dataset '{name}' is malformed: {source}")]
    Malformed {
        name: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
}
