//! Utility modules for the impact map site
//!
//! Small helpers that sit next to the map: counter formatting, the mobile
//! breakpoint, and WhatsApp contact links.

pub mod breakpoint;
pub mod format;
pub mod whatsapp;

// Re-export commonly used items
pub use breakpoint::{is_mobile_width, tooltip_max_width_px, MOBILE_BREAKPOINT_PX};
pub use format::{format_count, format_kilograms};
pub use whatsapp::{random_whatsapp_url, whatsapp_url, WHATSAPP_NUMBERS};
