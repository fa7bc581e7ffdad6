pub mod frame_controls;
pub mod hotspot_overlay;
pub mod navbar;
pub mod placeholder;
