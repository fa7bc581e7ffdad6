//! Paths and dimensions for the pre-rendered scene imagery. Frames are served
//! as static files; nothing here touches the network or the filesystem.

use crate::models::{canonical_tower_id, AssetGroup};

/// Number of orbit frames rendered for the project overview.
pub const PROJECT_FRAME_COUNT: usize = 4;

/// Number of orbit frames rendered per tower asset group.
pub const TOWER_FRAME_COUNT: usize = 15;

/// Overlay coordinate space. Hotspot outlines are authored against this box
/// and stretched with the image, so they stay glued to the frame at any
/// viewport size.
pub const VIEWBOX_WIDTH: u32 = 1920;
pub const VIEWBOX_HEIGHT: u32 = 1080;

pub fn project_frame_path(index: usize) -> String {
    format!("/iso/project/{index}.png")
}

pub fn tower_frame_path(group: AssetGroup, index: usize) -> String {
    format!("/iso/towers/{group}/{index}.png")
}

/// Floor plans are per tower, not per asset group, and the directories are
/// named by the canonical "T"-prefixed identifier.
pub fn floor_plan_path(tower: &str) -> String {
    format!("/iso/floors/{}/typical.png", canonical_tower_id(tower))
}

/// Every unit currently shares the one 3 BHK layout sheet.
pub fn unit_layout_path() -> &'static str {
    "/iso/flats/a-3bhk.png"
}
