use serde::Deserialize;

/// The four levels of the navigation hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Project,
    Tower,
    Floor,
    Unit,
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Project => write!(f, "project"),
            ViewKind::Tower => write!(f, "tower"),
            ViewKind::Floor => write!(f, "floor"),
            ViewKind::Unit => write!(f, "unit"),
        }
    }
}

/// One node in the Project → Tower → Floor → Unit hierarchy.
///
/// Deeper variants carry every ancestor identifier, so a Floor always knows
/// its tower and a Unit always knows its tower and floor. Identifiers are
/// kept as the raw strings found in the route. Aliasing to asset groups
/// happens only when assets are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Project,
    Tower { tower: String },
    Floor { tower: String, floor: String },
    Unit { tower: String, floor: String, unit: String },
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Project => ViewKind::Project,
            View::Tower { .. } => ViewKind::Tower,
            View::Floor { .. } => ViewKind::Floor,
            View::Unit { .. } => ViewKind::Unit,
        }
    }

    pub fn tower_id(&self) -> Option<&str> {
        match self {
            View::Project => None,
            View::Tower { tower } | View::Floor { tower, .. } | View::Unit { tower, .. } => {
                Some(tower)
            }
        }
    }

    pub fn floor_id(&self) -> Option<&str> {
        match self {
            View::Floor { floor, .. } | View::Unit { floor, .. } => Some(floor),
            _ => None,
        }
    }

    pub fn unit_id(&self) -> Option<&str> {
        match self {
            View::Unit { unit, .. } => Some(unit),
            _ => None,
        }
    }

    /// The view one level up the hierarchy; `None` at the project root.
    pub fn parent(&self) -> Option<View> {
        match self {
            View::Project => None,
            View::Tower { .. } => Some(View::Project),
            View::Floor { tower, .. } => Some(View::Tower {
                tower: tower.clone(),
            }),
            View::Unit { tower, floor, .. } => Some(View::Floor {
                tower: tower.clone(),
                floor: floor.clone(),
            }),
        }
    }
}

/// A clickable hotspot: an outline in overlay coordinates plus the identifier
/// of the child view it leads to. The outline is opaque path data, only the
/// renderer interprets it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    pub target: String,
    pub outline: String,
}

/// Shared image/hotspot asset set for a pair of towers.
///
/// Towers are rendered two to an asset set, so the six raw identifiers alias
/// onto three groups. Anything outside the known identifiers maps to `None`
/// and the caller treats that as a missing asset group rather than passing
/// the input through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetGroup {
    T1T2,
    T3T4,
    T5T6,
}

impl AssetGroup {
    pub const GROUPS: [AssetGroup; 3] = [AssetGroup::T1T2, AssetGroup::T3T4, AssetGroup::T5T6];

    /// Alias a raw tower identifier to its asset group. Group identifiers
    /// alias to themselves, so the mapping is idempotent. Matching is exact:
    /// no case folding, no trimming.
    pub fn for_tower(id: &str) -> Option<AssetGroup> {
        match id {
            "T1" | "T2" | "t1_t2" => Some(AssetGroup::T1T2),
            "T3" | "T4" | "t3_t4" => Some(AssetGroup::T3T4),
            "T5" | "T6" | "t5_t6" => Some(AssetGroup::T5T6),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetGroup::T1T2 => "t1_t2",
            AssetGroup::T3T4 => "t3_t4",
            AssetGroup::T5T6 => "t5_t6",
        }
    }
}

impl std::fmt::Display for AssetGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalize a tower route parameter to its "T"-prefixed form. Floor and unit
/// routes occasionally arrive with the bare number ("5" instead of "T5");
/// identifiers already starting with 'T' pass through unchanged.
pub fn canonical_tower_id(id: &str) -> String {
    if id.starts_with('T') {
        id.to_string()
    } else {
        format!("T{id}")
    }
}
