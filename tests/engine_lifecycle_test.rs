// Anchor recomputation, change detection and teardown

mod common;

use common::{poi_at, row_of_pois, PixelProjector};
use impact_map_wasm::{Anchor, EngineEvent, EngineUpdate, PoiId, TooltipEngine};

fn edge_pois() -> Vec<impact_map_wasm::Poi> {
    vec![
        poi_at(1, 1150.0, 400.0), // right edge
        poi_at(2, 40.0, 400.0),   // left edge
        poi_at(3, 600.0, 780.0),  // bottom edge
        poi_at(4, 600.0, 20.0),   // top edge
    ]
}

#[test]
fn test_recompute_resolves_every_poi() {
    let projector = PixelProjector::new(1200.0, 800.0);
    let mut engine = TooltipEngine::new();
    engine.start(edge_pois());

    let pending = engine.recompute(&projector).expect("viewport is measurable");
    assert!(engine.apply(pending));

    assert_eq!(engine.anchor_for(&PoiId::from(1)), Anchor::Right);
    assert_eq!(engine.anchor_for(&PoiId::from(2)), Anchor::Left);
    assert_eq!(engine.anchor_for(&PoiId::from(3)), Anchor::Bottom);
    assert_eq!(engine.anchor_for(&PoiId::from(4)), Anchor::Top);
    assert_eq!(engine.anchors().len(), 4);
}

#[test]
fn test_unknown_poi_defaults_to_bottom() {
    let engine = TooltipEngine::new();
    assert_eq!(engine.anchor_for(&PoiId::from("nowhere")), Anchor::Bottom);
}

#[test]
fn test_projection_failure_only_affects_that_poi() {
    // POI 2 sits at x = 40, which this map refuses to project
    let projector = PixelProjector::new(1200.0, 800.0).failing_at(40.0);
    let mut engine = TooltipEngine::new();
    engine.start(edge_pois());

    let pending = engine.recompute(&projector).unwrap();
    assert_eq!(pending.anchors().len(), 4);
    assert!(engine.apply(pending));

    assert_eq!(engine.anchor_for(&PoiId::from(1)), Anchor::Right);
    assert_eq!(engine.anchor_for(&PoiId::from(2)), Anchor::Bottom);
    assert_eq!(engine.anchor_for(&PoiId::from(3)), Anchor::Bottom);
    assert_eq!(engine.anchor_for(&PoiId::from(4)), Anchor::Top);
}

#[test]
fn test_unmeasurable_viewport_skips_pass_and_keeps_anchors() {
    let projector = PixelProjector::new(1200.0, 800.0);
    let mut engine = TooltipEngine::new();
    engine.start(edge_pois());
    let pending = engine.recompute(&projector).unwrap();
    engine.apply(pending);
    let before = engine.anchors().clone();

    let hidden = PixelProjector::unmeasured();
    assert!(engine.recompute(&hidden).is_none());
    assert_eq!(
        engine.handle(EngineEvent::ViewportChanged, &hidden),
        EngineUpdate::Unchanged
    );
    assert_eq!(engine.anchors(), &before);
}

#[test]
fn test_unchanged_viewport_does_not_replace_mapping() {
    let projector = PixelProjector::new(1200.0, 800.0);
    let mut engine = TooltipEngine::new();
    engine.start(edge_pois());

    assert!(engine.apply(engine.recompute(&projector).unwrap()));
    assert!(!engine.apply(engine.recompute(&projector).unwrap()));
}

#[test]
fn test_resize_that_moves_an_anchor_replaces_mapping() {
    let projector = PixelProjector::new(1200.0, 1200.0);
    let mut engine = TooltipEngine::new();
    engine.start(vec![poi_at(1, 500.0, 600.0)]);
    engine.apply(engine.recompute(&projector).unwrap());
    // 500px from the left edge, 700 from the right: opens rightward
    assert_eq!(engine.anchor_for(&PoiId::from(1)), Anchor::Left);

    // Shrinking to 600px wide leaves 100px on the right: opens leftward
    projector.resize(600.0, 1200.0);
    assert!(engine.apply(engine.recompute(&projector).unwrap()));
    assert_eq!(engine.anchor_for(&PoiId::from(1)), Anchor::Right);
}

#[test]
fn test_rotation_uses_last_known_anchors_between_recomputations() {
    let projector = PixelProjector::new(1200.0, 800.0);
    let mut engine = TooltipEngine::new();
    engine.start(edge_pois());
    engine.apply(engine.recompute(&projector).unwrap());

    // Viewport changes but the result has not been applied yet
    projector.resize(300.0, 800.0);
    let pending = engine.recompute(&projector).unwrap();

    engine.tick();
    let active = engine.active_poi().unwrap().id.clone();
    assert_eq!(active, PoiId::from(2));
    assert_eq!(engine.anchor_for(&active), Anchor::Left);

    // Once applied, the stale anchor is corrected
    assert!(engine.apply(pending));
    assert_eq!(engine.anchor_for(&active), Anchor::Top);
}

#[test]
fn test_stop_discards_late_recomputation() {
    let projector = PixelProjector::new(1200.0, 800.0);
    let mut engine = TooltipEngine::new();
    engine.start(row_of_pois(3));
    let pending = engine.recompute(&projector).unwrap();

    engine.stop();
    assert!(!engine.apply(pending.clone()));
    assert_eq!(
        engine.handle(EngineEvent::AnchorsReady(pending), &projector),
        EngineUpdate::Unchanged
    );
    assert!(engine.anchors().is_empty());
    assert!(engine.recompute(&projector).is_none());
}

#[test]
fn test_result_from_previous_session_is_rejected_after_restart() {
    let projector = PixelProjector::new(1200.0, 800.0);
    let mut engine = TooltipEngine::new();
    let first = engine.start(row_of_pois(3));
    let pending = engine.recompute(&projector).unwrap();
    assert_eq!(pending.session(), first);

    engine.stop();
    let second = engine.start(row_of_pois(3));
    assert_ne!(first, second);
    assert!(!engine.apply(pending));
    assert!(engine.anchors().is_empty());
}

#[test]
fn test_interleaved_events() {
    let projector = PixelProjector::new(1200.0, 800.0);
    let mut engine = TooltipEngine::new();
    engine.start(edge_pois());

    let first = match engine.handle(EngineEvent::ViewportChanged, &projector) {
        EngineUpdate::AnchorsComputed(pending) => pending,
        other => panic!("expected anchors, got {:?}", other),
    };
    assert_eq!(engine.handle(EngineEvent::Tick, &projector), EngineUpdate::ActiveChanged(1));
    assert_eq!(
        engine.handle(EngineEvent::AnchorsReady(first), &projector),
        EngineUpdate::AnchorsChanged
    );
    assert_eq!(engine.handle(EngineEvent::Tick, &projector), EngineUpdate::ActiveChanged(2));
    assert_eq!(engine.anchor_for(&PoiId::from(3)), Anchor::Bottom);
}
