//! Models module for the impact map
//!
//! Data types shared by the placement heuristic, the rotation engine and the
//! JavaScript API.

pub mod anchor;
pub mod geometry;
pub mod poi;
pub mod view_state;

// Re-export commonly used types
pub use anchor::Anchor;
pub use geometry::{LngLat, ScreenPoint, ViewportSize};
pub use poi::{Poi, PoiId};
pub use view_state::{MapSettings, Padding, ViewState};
