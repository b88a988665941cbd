// Anchor heuristic properties over synthetic viewports

use impact_map_wasm::placement::resolver::{preferred_anchor, EdgeDistances};
use impact_map_wasm::{resolve_anchor, Anchor, ScreenPoint, ViewportSize};

fn grid(viewport: ViewportSize, step: f64) -> Vec<ScreenPoint> {
    let mut points = Vec::new();
    let mut x = 0.0;
    while x <= viewport.width {
        let mut y = 0.0;
        while y <= viewport.height {
            points.push(ScreenPoint::new(x, y));
            y += step;
        }
        x += step;
    }
    points
}

/// The first fallback the heuristic tries after its preferred anchor
fn first_fallback(preferred: Anchor) -> Anchor {
    match preferred {
        Anchor::Left | Anchor::Right => Anchor::Top,
        _ => Anchor::Left,
    }
}

#[test]
fn test_never_picks_non_fitting_anchor_when_a_candidate_fits() {
    let viewports = [
        ViewportSize { width: 1200.0, height: 800.0 },
        ViewportSize { width: 375.0, height: 600.0 },
        ViewportSize { width: 900.0, height: 120.0 },
    ];

    for viewport in viewports {
        for point in grid(viewport, 25.0) {
            let distances = EdgeDistances::measure(point, viewport);
            let fits = distances.fits();
            let preferred = preferred_anchor(&distances);
            let anchor = resolve_anchor(point, viewport);

            if fits.allows(preferred) {
                assert_eq!(anchor, preferred, "point {:?} in {:?}", point, viewport);
            } else if fits.allows(first_fallback(preferred)) {
                assert_eq!(anchor, first_fallback(preferred), "point {:?} in {:?}", point, viewport);
            }
        }
    }
}

#[test]
fn test_only_edge_anchors_are_produced() {
    let viewport = ViewportSize { width: 1200.0, height: 800.0 };
    for point in grid(viewport, 50.0) {
        let anchor = resolve_anchor(point, viewport);
        assert!(
            matches!(anchor, Anchor::Top | Anchor::Bottom | Anchor::Left | Anchor::Right),
            "unexpected {:?} at {:?}",
            anchor,
            point
        );
    }
}

#[test]
fn test_resolution_is_idempotent() {
    let viewport = ViewportSize { width: 1024.0, height: 640.0 };
    for point in grid(viewport, 32.0) {
        assert_eq!(resolve_anchor(point, viewport), resolve_anchor(point, viewport));
    }
}

#[test]
fn test_horizontal_center_uses_vertical_nearness_only() {
    // Narrow viewport: the horizontal center is only 150px from either side
    let viewport = ViewportSize { width: 300.0, height: 800.0 };

    // 150px from the sides, 100px from the top: horizontal-edge branch
    let near_top = ScreenPoint::new(150.0, 100.0);
    assert!(!EdgeDistances::measure(near_top, viewport).nearer_vertical_edge());
    assert_eq!(resolve_anchor(near_top, viewport), Anchor::Top);

    // 150px from the sides, 400px from top and bottom: vertical-edge branch.
    // Equidistant from left and right counts as "closer to the left", and
    // neither side fits a 380px tooltip, so it drops below the marker.
    let middle = ScreenPoint::new(150.0, 400.0);
    assert!(EdgeDistances::measure(middle, viewport).nearer_vertical_edge());
    assert_eq!(preferred_anchor(&EdgeDistances::measure(middle, viewport)), Anchor::Left);
    assert_eq!(resolve_anchor(middle, viewport), Anchor::Top);
}

#[test]
fn test_wide_viewport_center_row_prefers_sides() {
    let viewport = ViewportSize { width: 1200.0, height: 800.0 };

    // Left third of the center row opens rightward, right third leftward
    assert_eq!(resolve_anchor(ScreenPoint::new(200.0, 400.0), viewport), Anchor::Left);
    assert_eq!(resolve_anchor(ScreenPoint::new(1000.0, 400.0), viewport), Anchor::Right);
}

#[test]
fn test_corner_points() {
    let viewport = ViewportSize { width: 1200.0, height: 800.0 };

    // Tie at each corner goes to the top/bottom branch
    assert_eq!(resolve_anchor(ScreenPoint::new(0.0, 0.0), viewport), Anchor::Top);
    assert_eq!(resolve_anchor(ScreenPoint::new(1200.0, 0.0), viewport), Anchor::Top);
    assert_eq!(resolve_anchor(ScreenPoint::new(0.0, 800.0), viewport), Anchor::Bottom);
    assert_eq!(resolve_anchor(ScreenPoint::new(1200.0, 800.0), viewport), Anchor::Bottom);
}

#[test]
fn test_points_outside_viewport_still_resolve() {
    let viewport = ViewportSize { width: 1200.0, height: 800.0 };

    // Off the right edge: negative room on the right, plenty on the left
    assert_eq!(resolve_anchor(ScreenPoint::new(1300.0, 400.0), viewport), Anchor::Right);

    // Above the top edge: no room above, room below
    assert_eq!(resolve_anchor(ScreenPoint::new(600.0, -40.0), viewport), Anchor::Top);
}
