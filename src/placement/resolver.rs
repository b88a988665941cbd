//! Edge-distance anchor heuristic
//!
//! Picks the anchor for one marker so its tooltip leans away from the nearest
//! edge of the map surface. This is a greedy rule, not a placement solver:
//! the nearest edge decides the axis, and the fit flags decide the side.

use crate::models::{Anchor, ScreenPoint, ViewportSize};

/// Assumed tooltip footprint width
pub const TOOLTIP_WIDTH_PX: f64 = 380.0;

/// Assumed tooltip footprint height
pub const TOOLTIP_HEIGHT_PX: f64 = 50.0;

/// Clearance kept between the tooltip and the viewport edge
pub const TOOLTIP_OFFSET_PX: f64 = 15.0;

/// Distances from a point to each viewport edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDistances {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl EdgeDistances {
    pub fn measure(point: ScreenPoint, viewport: ViewportSize) -> Self {
        Self {
            left: point.x,
            right: viewport.width - point.x,
            top: point.y,
            bottom: viewport.height - point.y,
        }
    }

    /// Closest of the left/right edges
    pub fn nearest_vertical_edge(&self) -> f64 {
        self.left.min(self.right)
    }

    /// Closest of the top/bottom edges
    pub fn nearest_horizontal_edge(&self) -> f64 {
        self.top.min(self.bottom)
    }

    /// Whether the point is strictly nearer a left/right edge than a
    /// top/bottom edge; ties count as horizontal
    pub fn nearer_vertical_edge(&self) -> bool {
        self.nearest_vertical_edge() < self.nearest_horizontal_edge()
    }

    pub fn fits(&self) -> FitFlags {
        let horizontal = TOOLTIP_WIDTH_PX + TOOLTIP_OFFSET_PX;
        let vertical = TOOLTIP_HEIGHT_PX + TOOLTIP_OFFSET_PX;
        FitFlags {
            left: self.left > horizontal,
            right: self.right > horizontal,
            top: self.top > vertical,
            bottom: self.bottom > vertical,
        }
    }
}

/// Which sides of the point have room for the whole tooltip
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FitFlags {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl FitFlags {
    /// Whether a tooltip with this anchor stays inside the viewport on the
    /// axis the anchor pushes it along
    ///
    /// The box grows away from its anchor: a `right` anchor needs room on the
    /// left of the point, a `top` anchor needs room below it. Corner anchors
    /// need both sides; `center` needs nothing on either axis.
    pub fn allows(&self, anchor: Anchor) -> bool {
        match anchor {
            Anchor::Right => self.left,
            Anchor::Left => self.right,
            Anchor::Top => self.bottom,
            Anchor::Bottom => self.top,
            Anchor::TopLeft => self.bottom && self.right,
            Anchor::TopRight => self.bottom && self.left,
            Anchor::BottomLeft => self.top && self.right,
            Anchor::BottomRight => self.top && self.left,
            Anchor::Center => true,
        }
    }
}

/// The anchor the heuristic tries first for a given point, before any fit
/// check
pub fn preferred_anchor(distances: &EdgeDistances) -> Anchor {
    if distances.nearer_vertical_edge() {
        if distances.right < distances.left {
            Anchor::Right
        } else {
            Anchor::Left
        }
    } else if distances.bottom < distances.top {
        Anchor::Bottom
    } else {
        Anchor::Top
    }
}

/// Resolve the tooltip anchor for a marker at `point`
///
/// Deterministic in its inputs. Points outside the viewport still resolve:
/// negative distances simply never fit.
pub fn resolve_anchor(point: ScreenPoint, viewport: ViewportSize) -> Anchor {
    let distances = EdgeDistances::measure(point, viewport);
    let fits = distances.fits();
    let preferred = preferred_anchor(&distances);

    if fits.allows(preferred) {
        return preferred;
    }

    match preferred {
        // Squeezed against a side edge: drop below the marker, else above
        Anchor::Left | Anchor::Right => {
            if fits.allows(Anchor::Top) {
                Anchor::Top
            } else {
                Anchor::Bottom
            }
        }
        // Squeezed against the top or bottom edge: open to the right, else left
        _ => {
            if fits.allows(Anchor::Left) {
                Anchor::Left
            } else {
                Anchor::Right
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ViewportSize {
        ViewportSize { width: 1200.0, height: 800.0 }
    }

    #[test]
    fn test_edge_distances() {
        let d = EdgeDistances::measure(ScreenPoint::new(100.0, 300.0), viewport());
        assert_eq!(d.left, 100.0);
        assert_eq!(d.right, 1100.0);
        assert_eq!(d.top, 300.0);
        assert_eq!(d.bottom, 500.0);
        assert!(d.nearer_vertical_edge());
    }

    #[test]
    fn test_fit_thresholds_are_strict() {
        // Exactly width + offset to the left is not enough room
        let d = EdgeDistances::measure(ScreenPoint::new(395.0, 65.0), viewport());
        let fits = d.fits();
        assert!(!fits.left);
        assert!(!fits.top);

        let d = EdgeDistances::measure(ScreenPoint::new(395.5, 65.5), viewport());
        let fits = d.fits();
        assert!(fits.left);
        assert!(fits.top);
    }

    #[test]
    fn test_near_right_edge_opens_left() {
        let anchor = resolve_anchor(ScreenPoint::new(1150.0, 400.0), viewport());
        assert_eq!(anchor, Anchor::Right);
    }

    #[test]
    fn test_near_left_edge_opens_right() {
        let anchor = resolve_anchor(ScreenPoint::new(40.0, 400.0), viewport());
        assert_eq!(anchor, Anchor::Left);
    }

    #[test]
    fn test_near_bottom_edge_opens_upward() {
        let anchor = resolve_anchor(ScreenPoint::new(600.0, 780.0), viewport());
        assert_eq!(anchor, Anchor::Bottom);
    }

    #[test]
    fn test_near_top_edge_opens_downward() {
        let anchor = resolve_anchor(ScreenPoint::new(600.0, 20.0), viewport());
        assert_eq!(anchor, Anchor::Top);
    }

    #[test]
    fn test_narrow_viewport_falls_back_vertically() {
        // 300px wide: no horizontal placement ever fits
        let narrow = ViewportSize { width: 300.0, height: 800.0 };

        // Near the right edge, lots of room below
        assert_eq!(resolve_anchor(ScreenPoint::new(280.0, 300.0), narrow), Anchor::Top);

        // Near the left edge, but close to the bottom too
        assert_eq!(resolve_anchor(ScreenPoint::new(10.0, 760.0), narrow), Anchor::Bottom);
    }

    #[test]
    fn test_short_viewport_falls_back_horizontally() {
        // 60px tall: no vertical placement ever fits
        let short = ViewportSize { width: 1200.0, height: 60.0 };

        // Near the top, room on the right
        assert_eq!(resolve_anchor(ScreenPoint::new(600.0, 10.0), short), Anchor::Left);

        // Near the bottom, too close to the right edge to open rightward
        assert_eq!(resolve_anchor(ScreenPoint::new(1000.0, 50.0), short), Anchor::Right);
    }

    #[test]
    fn test_tie_goes_to_horizontal_edge_branch() {
        // 50px from the left edge and 50px from the top edge
        let d = EdgeDistances::measure(ScreenPoint::new(50.0, 50.0), viewport());
        assert!(!d.nearer_vertical_edge());
        assert_eq!(preferred_anchor(&d), Anchor::Top);
    }

    #[test]
    fn test_fit_flags_for_every_anchor() {
        let fits = FitFlags { left: true, right: false, top: false, bottom: true };
        assert!(fits.allows(Anchor::Right));
        assert!(!fits.allows(Anchor::Left));
        assert!(fits.allows(Anchor::Top));
        assert!(!fits.allows(Anchor::Bottom));
        assert!(fits.allows(Anchor::TopRight));
        assert!(!fits.allows(Anchor::TopLeft));
        assert!(!fits.allows(Anchor::BottomLeft));
        assert!(!fits.allows(Anchor::BottomRight));
        assert!(fits.allows(Anchor::Center));
    }
}
