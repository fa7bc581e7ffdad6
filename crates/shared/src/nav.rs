//! Region resolution: turning a click on a hotspot into the next view down
//! the hierarchy. Pure functions over the registry; the frontend decides what
//! to do when resolution fails.

use crate::models::{AssetGroup, Region, View, ViewKind};
use crate::registry::HotspotRegistry;

/// Why a hotspot activation produced no child view. Both conditions are
/// recoverable; callers fall back to a placeholder instead of navigating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The target names nothing clickable in the current view.
    UnknownTarget { kind: ViewKind, target: String },
    /// The view's tower identifier maps to no image/hotspot assets.
    MissingAssetGroup { tower: String },
}

impl std::fmt::Display for NavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavError::UnknownTarget { kind, target } => {
                write!(f, "No hotspot target '{}' in the {} view", target, kind)
            }
            NavError::MissingAssetGroup { tower } => {
                write!(f, "No asset group for tower '{}'", tower)
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Resolve a clicked target against the current view.
///
/// On success the returned view is exactly one level deeper, with every
/// ancestor identifier carried over unchanged. A target counts as known if it
/// appears in any frame of the relevant scene; a building can be occluded in
/// some camera positions without ceasing to be a valid child.
pub fn resolve(registry: &HotspotRegistry, view: &View, target: &str) -> Result<View, NavError> {
    match view {
        View::Project => {
            if frames_contain(registry.project_frames(), target) {
                Ok(View::Tower {
                    tower: target.to_string(),
                })
            } else {
                Err(unknown(ViewKind::Project, target))
            }
        }
        View::Tower { tower } => {
            let group = AssetGroup::for_tower(tower).ok_or_else(|| NavError::MissingAssetGroup {
                tower: tower.clone(),
            })?;
            if frames_contain(registry.tower_frames(group), target) {
                Ok(View::Floor {
                    tower: tower.clone(),
                    floor: target.to_string(),
                })
            } else {
                Err(unknown(ViewKind::Tower, target))
            }
        }
        View::Floor { tower, floor } => {
            let plan = registry
                .floor_plan(tower)
                .ok_or_else(|| NavError::MissingAssetGroup {
                    tower: tower.clone(),
                })?;
            if plan.iter().any(|region| region.target == target) {
                Ok(View::Unit {
                    tower: tower.clone(),
                    floor: floor.clone(),
                    unit: target.to_string(),
                })
            } else {
                Err(unknown(ViewKind::Floor, target))
            }
        }
        // Units are leaves; nothing resolves below them.
        View::Unit { .. } => Err(unknown(ViewKind::Unit, target)),
    }
}

fn frames_contain(frames: &[Vec<Region>], target: &str) -> bool {
    frames.iter().flatten().any(|region| region.target == target)
}

fn unknown(kind: ViewKind, target: &str) -> NavError {
    NavError::UnknownTarget {
        kind,
        target: target.to_string(),
    }
}
