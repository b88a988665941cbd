//! Tooltip placement
//!
//! - `resolver`: the pure edge-distance heuristic for one screen point
//! - `projector`: the map collaborator trait (geo -> pixel, viewport size)
//! - `batch`: resolving every POI of a view and detecting changes

pub mod batch;
pub mod projector;
pub mod resolver;

pub use batch::{resolve_batch, AnchorMap};
pub use projector::{LinearProjector, MapProjector};
pub use resolver::{
    resolve_anchor, EdgeDistances, FitFlags, TOOLTIP_HEIGHT_PX, TOOLTIP_OFFSET_PX, TOOLTIP_WIDTH_PX,
};
