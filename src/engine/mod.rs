//! Tooltip rotation engine
//!
//! The engine state machine (`tooltip_engine`) and the rotation primitives it
//! is built on (`rotation`). Nothing here touches the browser; the
//! `api::engine` driver wires it to real timers and map events.

pub mod rotation;
pub mod tooltip_engine;

pub use rotation::{Rotation, TickClock, ROTATION_INTERVAL_MS};
pub use tooltip_engine::{EngineEvent, EngineUpdate, PendingAnchors, Session, TooltipEngine};
