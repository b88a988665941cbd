//! Map camera presets and interaction settings
//!
//! The impact map is a locked, decorative map: the page never lets visitors
//! pan or zoom it, so the only camera changes come from layout (the mobile
//! preset replacing the desktop one after the breakpoint is detected) and
//! container resizes.

use serde::{Deserialize, Serialize};

/// Camera padding in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Camera state in the shape `react-map-gl` expects for `initialViewState`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub padding: Padding,
}

impl ViewState {
    /// Flat overview of the whole country for wide screens
    pub fn desktop() -> Self {
        Self {
            longitude: -52.3,
            latitude: -12.8,
            zoom: 4.2,
            pitch: 0.0,
            bearing: 0.0,
            padding: Padding::default(),
        }
    }

    /// Tilted, zoomed-out view for narrow screens
    pub fn mobile() -> Self {
        Self {
            longitude: -49.3,
            latitude: -16.2,
            zoom: 3.0,
            pitch: 45.0,
            bearing: -25.0,
            padding: Padding::default(),
        }
    }

    pub fn for_layout(is_mobile: bool) -> Self {
        if is_mobile {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }
}

/// Interaction flags and camera limits passed to the map component
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub scroll_zoom: bool,
    pub box_zoom: bool,
    pub drag_rotate: bool,
    pub drag_pan: bool,
    pub keyboard: bool,
    pub double_click_zoom: bool,
    pub touch_zoom_rotate: bool,
    pub touch_pitch: bool,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub min_pitch: f64,
    pub max_pitch: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            scroll_zoom: false,
            box_zoom: false,
            drag_rotate: false,
            drag_pan: false,
            keyboard: false,
            double_click_zoom: false,
            touch_zoom_rotate: false,
            touch_pitch: false,
            min_zoom: 0.0,
            max_zoom: 20.0,
            min_pitch: 0.0,
            max_pitch: 85.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_selects_preset() {
        assert_eq!(ViewState::for_layout(true), ViewState::mobile());
        assert_eq!(ViewState::for_layout(false), ViewState::desktop());
    }

    #[test]
    fn test_view_state_serializes_camel_case() {
        let value = serde_json::to_value(ViewState::mobile()).unwrap();
        assert_eq!(value["bearing"], -25.0);
        assert_eq!(value["padding"]["top"], 0.0);

        let settings = serde_json::to_value(MapSettings::default()).unwrap();
        assert_eq!(settings["dragPan"], false);
        assert_eq!(settings["maxPitch"], 85.0);
    }
}
