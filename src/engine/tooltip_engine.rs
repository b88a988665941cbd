//! Tooltip rotation engine
//!
//! Owns the POIs of one map view, the rotating highlight and the anchor map.
//! Timer ticks and viewport changes arrive as `EngineEvent`s and are handled
//! one at a time by the single owner, so the two triggers never touch the
//! state concurrently.
//!
//! Anchor recomputation is split in two steps. `recompute` reads the camera
//! and produces a `PendingAnchors` tagged with the current session; `apply`
//! installs it later (the browser driver waits for the next animation frame).
//! A result whose session is no longer live is dropped, which is what keeps a
//! late frame from writing into a stopped or restarted engine.

use serde_json::{json, Value};

use super::rotation::{Rotation, TickClock};
use crate::error::EngineError;
use crate::models::{Anchor, Poi, PoiId};
use crate::placement::{resolve_batch, AnchorMap, MapProjector};

/// Identifies one `start`..`stop` span of an engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Session(u64);

/// Anchors computed for a session, waiting to be applied
#[derive(Clone, Debug, PartialEq)]
pub struct PendingAnchors {
    session: Session,
    anchors: AnchorMap,
}

impl PendingAnchors {
    pub fn session(&self) -> Session {
        self.session
    }

    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }
}

/// Messages driving the engine
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    /// The rotation interval elapsed
    Tick,
    /// Pan, zoom, rotate or resize happened on the map
    ViewportChanged,
    /// A previously computed recomputation is ready to be installed
    AnchorsReady(PendingAnchors),
}

/// What handling an event produced
#[derive(Clone, Debug, PartialEq)]
pub enum EngineUpdate {
    /// Nothing observable changed
    Unchanged,
    /// The rotation ticked; this is the highlighted index now
    ActiveChanged(usize),
    /// A recomputation is ready and should be applied on the next frame
    AnchorsComputed(PendingAnchors),
    /// The anchor map was replaced
    AnchorsChanged,
}

#[derive(Debug, Default)]
pub struct TooltipEngine {
    pois: Vec<Poi>,
    rotation: Option<Rotation>,
    anchors: AnchorMap,
    clock: TickClock,
    session: u64,
    running: bool,
}

impl TooltipEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose `advance_time` ticks every `interval_ms`
    pub fn with_interval(interval_ms: u32) -> Self {
        Self {
            clock: TickClock::new(interval_ms),
            ..Self::default()
        }
    }

    /// Begin a session over `pois`
    ///
    /// Resets the highlight to the first POI and clears the anchor map. An
    /// empty list is accepted: the engine runs with nothing highlighted and
    /// `needs_rotation_timer` reports false.
    pub fn start(&mut self, pois: Vec<Poi>) -> Session {
        if self.running {
            log::debug!("Restarting tooltip engine session {}", self.session);
        }

        self.session += 1;
        self.running = true;
        self.rotation = Rotation::new(pois.len());
        self.anchors = AnchorMap::new();
        self.clock.reset();
        self.pois = pois;

        match self.rotation {
            Some(rotation) => log::info!(
                "Tooltip engine started with {} POIs (session {})",
                rotation.len(),
                self.session
            ),
            None => log::warn!("{}; rotation timer not started", EngineError::EmptyPoiSet),
        }

        Session(self.session)
    }

    /// End the session: drop POIs, anchors and highlight
    ///
    /// Results computed before this call are rejected by `apply`.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }

        log::info!("Tooltip engine stopped (session {})", self.session);
        self.running = false;
        self.session += 1;
        self.rotation = None;
        self.pois.clear();
        self.anchors = AnchorMap::new();
        self.clock.reset();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current session token, if running
    pub fn session(&self) -> Option<Session> {
        self.running.then_some(Session(self.session))
    }

    /// Whether the host should keep a rotation timer armed
    pub fn needs_rotation_timer(&self) -> bool {
        self.running && self.rotation.is_some()
    }

    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    pub fn active_index(&self) -> Option<usize> {
        self.rotation.map(|rotation| rotation.active_index())
    }

    /// The highlighted POI, `None` when stopped or the POI list is empty
    pub fn active_poi(&self) -> Option<&Poi> {
        self.active_index().and_then(|index| self.pois.get(index))
    }

    /// Last resolved anchor for a POI, `bottom` if never resolved
    pub fn anchor_for(&self, id: &PoiId) -> Anchor {
        self.anchors.anchor_for(id)
    }

    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }

    /// Advance the highlight by one POI
    ///
    /// Returns the new index, or `None` if there is nothing to rotate.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.running {
            return None;
        }
        self.rotation.as_mut().map(Rotation::advance)
    }

    /// Feed elapsed wall-clock time and apply every tick that fell due
    ///
    /// Returns the number of ticks applied.
    pub fn advance_time(&mut self, elapsed_ms: u64) -> u64 {
        if !self.needs_rotation_timer() {
            return 0;
        }

        let due = self.clock.advance(elapsed_ms);
        if let Some(rotation) = self.rotation.as_mut() {
            rotation.advance_by(due);
        }
        due
    }

    /// Resolve anchors for every POI against the current camera
    ///
    /// `None` when stopped or when the viewport cannot be measured yet; the
    /// previous anchors stay in place.
    pub fn recompute<P: MapProjector + ?Sized>(&self, projector: &P) -> Option<PendingAnchors> {
        if !self.running {
            return None;
        }

        resolve_batch(&self.pois, projector).map(|anchors| PendingAnchors {
            session: Session(self.session),
            anchors,
        })
    }

    /// Install a recomputation result
    ///
    /// Returns true if the anchor map was replaced. Results from another
    /// session are discarded, and identical maps are not reinstalled.
    pub fn apply(&mut self, pending: PendingAnchors) -> bool {
        if !self.running || pending.session != Session(self.session) {
            log::debug!(
                "Discarding anchors computed for a stale session ({:?})",
                pending.session
            );
            return false;
        }

        if !pending.anchors.differs_from(&self.anchors) {
            return false;
        }

        log::debug!("Applying {} recomputed anchors", pending.anchors.len());
        self.anchors = pending.anchors;
        true
    }

    /// Handle one event from the host's event loop
    pub fn handle<P: MapProjector + ?Sized>(&mut self, event: EngineEvent, projector: &P) -> EngineUpdate {
        match event {
            EngineEvent::Tick => match self.tick() {
                Some(index) => EngineUpdate::ActiveChanged(index),
                None => EngineUpdate::Unchanged,
            },
            EngineEvent::ViewportChanged => match self.recompute(projector) {
                Some(pending) => EngineUpdate::AnchorsComputed(pending),
                None => EngineUpdate::Unchanged,
            },
            EngineEvent::AnchorsReady(pending) => {
                if self.apply(pending) {
                    EngineUpdate::AnchorsChanged
                } else {
                    EngineUpdate::Unchanged
                }
            }
        }
    }

    /// GeoJSON source data for the marker layers
    ///
    /// Every POI becomes a point feature carrying its `id` and whether it is
    /// the highlighted one, which the circle layers use to size and color it.
    pub fn marker_features(&self) -> Value {
        let active_id = self.active_poi().map(|poi| &poi.id);
        let features: Vec<Value> = self
            .pois
            .iter()
            .map(|poi| {
                let is_active = active_id == Some(&poi.id);
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [poi.longitude, poi.latitude],
                    },
                    "properties": {
                        "id": poi.id,
                        "isActive": is_active,
                    },
                })
            })
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}
