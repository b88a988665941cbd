//! Tooltip anchor directions
//!
//! An anchor names the side of the tooltip box that is pinned to the marker,
//! using the same vocabulary as MapLibre's `Popup` `anchor` option: an anchor
//! of `right` means the box sits to the left of the point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

/// Which side of a screen point the tooltip is drawn on
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
    TopLeft = 4,
    TopRight = 5,
    BottomLeft = 6,
    BottomRight = 7,
    Center = 8,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::Top,
        Anchor::Bottom,
        Anchor::Left,
        Anchor::Right,
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
        Anchor::Center,
    ];

    /// The MapLibre `anchor` string for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
            Anchor::Left => "left",
            Anchor::Right => "right",
            Anchor::TopLeft => "top-left",
            Anchor::TopRight => "top-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomRight => "bottom-right",
            Anchor::Center => "center",
        }
    }
}

impl Default for Anchor {
    /// Unresolved tooltips sit above their marker
    fn default() -> Self {
        Anchor::Bottom
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .iter()
            .copied()
            .find(|anchor| anchor.as_str() == s)
            .ok_or_else(|| format!("Unknown anchor direction: '{}'", s))
    }
}
