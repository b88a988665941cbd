//! Batch anchor resolution over every POI of a map view

use serde::Serialize;
use std::collections::HashMap;

use super::projector::MapProjector;
use super::resolver::resolve_anchor;
use crate::error::EngineError;
use crate::models::{Anchor, Poi, PoiId};

/// Last computed anchor per POI
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct AnchorMap {
    anchors: HashMap<PoiId, Anchor>,
}

impl AnchorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: PoiId, anchor: Anchor) {
        self.anchors.insert(id, anchor);
    }

    pub fn get(&self, id: &PoiId) -> Option<Anchor> {
        self.anchors.get(id).copied()
    }

    /// Anchor for `id`, `bottom` when it has never been resolved
    pub fn anchor_for(&self, id: &PoiId) -> Anchor {
        self.get(id).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PoiId, &Anchor)> {
        self.anchors.iter()
    }

    /// Whether replacing `previous` with this map would change anything
    /// downstream: a different POI count, or any POI whose anchor moved
    pub fn differs_from(&self, previous: &AnchorMap) -> bool {
        self.anchors.len() != previous.anchors.len()
            || self
                .anchors
                .iter()
                .any(|(id, anchor)| previous.anchors.get(id) != Some(anchor))
    }
}

impl FromIterator<(PoiId, Anchor)> for AnchorMap {
    fn from_iter<I: IntoIterator<Item = (PoiId, Anchor)>>(iter: I) -> Self {
        Self {
            anchors: iter.into_iter().collect(),
        }
    }
}

/// Resolve anchors for every POI against the projector's current camera
///
/// Returns `None` when the viewport cannot be measured; the caller keeps its
/// previous anchors and waits for the next change notification. A POI whose
/// projection fails gets `bottom` and does not stop the rest of the batch.
pub fn resolve_batch<P: MapProjector + ?Sized>(pois: &[Poi], projector: &P) -> Option<AnchorMap> {
    let viewport = match projector.viewport_size() {
        Some(viewport) => viewport,
        None => {
            log::debug!("{}, skipping anchor pass", EngineError::ViewportUnavailable);
            return None;
        }
    };

    let anchors = pois
        .iter()
        .map(|poi| {
            let anchor = match projector.project(poi.lng_lat()) {
                Ok(point) => resolve_anchor(point, viewport),
                Err(err) => {
                    log::debug!("POI {}: {}, anchoring bottom", poi.id, err);
                    Anchor::Bottom
                }
            };
            (poi.id.clone(), anchor)
        })
        .collect();

    Some(anchors)
}
