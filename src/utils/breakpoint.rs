//! Mobile breakpoint detection

/// Viewports narrower than this are laid out as mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Tooltip max width on narrow screens
pub const MOBILE_TOOLTIP_MAX_WIDTH_PX: u32 = 280;

/// Tooltip max width everywhere else; matches the footprint the anchor
/// heuristic assumes
pub const DESKTOP_TOOLTIP_MAX_WIDTH_PX: u32 = 380;

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

pub fn tooltip_max_width_px(is_mobile: bool) -> u32 {
    if is_mobile {
        MOBILE_TOOLTIP_MAX_WIDTH_PX
    } else {
        DESKTOP_TOOLTIP_MAX_WIDTH_PX
    }
}

/// Width of the browser window, `None` outside a browser
#[cfg(target_arch = "wasm32")]
pub fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window_width() -> Option<f64> {
    None
}
