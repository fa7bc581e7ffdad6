use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::assets::{PROJECT_FRAME_COUNT, TOWER_FRAME_COUNT};
use crate::models::{canonical_tower_id, AssetGroup, Region};

static EMBEDDED_HOTSPOTS: &str = include_str!("../data/hotspots.json");

/// Raw shape of the hotspot document. Tower and floor sets are keyed by
/// plain strings in the JSON; validation resolves them to asset groups and
/// canonical tower identifiers.
#[derive(Debug, Deserialize)]
struct RegistryDoc {
    project: Vec<Vec<Region>>,
    towers: HashMap<String, Vec<Vec<Region>>>,
    floors: HashMap<String, Vec<Region>>,
}

/// Every hotspot outline for every scene, validated and keyed for lookup.
///
/// Project and tower scenes carry one region set per carousel frame, since
/// the outlines track the buildings as the camera orbits. A floor plan does
/// not rotate, so floors carry a single set per tower.
#[derive(Debug)]
pub struct HotspotRegistry {
    project: Vec<Vec<Region>>,
    towers: HashMap<AssetGroup, Vec<Vec<Region>>>,
    floors: HashMap<String, Vec<Region>>,
}

impl HotspotRegistry {
    pub fn from_json(raw: &str) -> Result<HotspotRegistry, String> {
        let doc: RegistryDoc = serde_json::from_str(raw)
            .map_err(|e| format!("Failed to parse hotspot data: {}", e))?;

        if doc.project.len() != PROJECT_FRAME_COUNT {
            return Err(format!(
                "Expected {} project frames, found {}",
                PROJECT_FRAME_COUNT,
                doc.project.len()
            ));
        }

        let mut towers = HashMap::new();
        for (key, frames) in doc.towers {
            let group = AssetGroup::for_tower(&key)
                .ok_or_else(|| format!("Tower frames keyed by unknown group '{}'", key))?;
            if frames.len() != TOWER_FRAME_COUNT {
                return Err(format!(
                    "Group {}: expected {} frames, found {}",
                    group,
                    TOWER_FRAME_COUNT,
                    frames.len()
                ));
            }
            if towers.insert(group, frames).is_some() {
                return Err(format!("Duplicate frame set for group {}", group));
            }
        }
        for group in AssetGroup::GROUPS {
            if !towers.contains_key(&group) {
                return Err(format!("No tower frames for group {}", group));
            }
        }

        let mut floors = HashMap::new();
        for (key, regions) in doc.floors {
            let tower = canonical_tower_id(&key);
            if AssetGroup::for_tower(&tower).is_none() {
                return Err(format!("Floor plan keyed by unknown tower '{}'", key));
            }
            if floors.insert(tower, regions).is_some() {
                return Err(format!("Duplicate floor plan for tower '{}'", key));
            }
        }

        Ok(HotspotRegistry {
            project: doc.project,
            towers,
            floors,
        })
    }

    /// Hotspots for one project carousel frame. Out-of-range frame indices
    /// simply have no hotspots.
    pub fn project_frame(&self, index: usize) -> &[Region] {
        self.project.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn project_frames(&self) -> &[Vec<Region>] {
        &self.project
    }

    /// Hotspots for one tower carousel frame of the given asset group.
    pub fn tower_frame(&self, group: AssetGroup, index: usize) -> &[Region] {
        self.towers
            .get(&group)
            .and_then(|frames| frames.get(index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tower_frames(&self, group: AssetGroup) -> &[Vec<Region>] {
        self.towers.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Unit hotspots on a tower's floor plan. Accepts raw or canonical tower
    /// identifiers; unknown towers have no plan.
    pub fn floor_plan(&self, tower: &str) -> Option<&[Region]> {
        self.floors
            .get(&canonical_tower_id(tower))
            .map(Vec::as_slice)
    }

    pub fn floor_plan_count(&self) -> usize {
        self.floors.len()
    }

    /// Total hotspot count across every scene.
    pub fn region_count(&self) -> usize {
        let project: usize = self.project.iter().map(Vec::len).sum();
        let towers: usize = self.towers.values().flatten().map(Vec::len).sum();
        let floors: usize = self.floors.values().map(Vec::len).sum();
        project + towers + floors
    }
}

static REGISTRY: OnceLock<HotspotRegistry> = OnceLock::new();

/// The registry parsed from the hotspot document compiled into the binary.
/// Parsing happens on first access. The document ships with the build, so a
/// parse failure is unrecoverable.
pub fn global() -> &'static HotspotRegistry {
    REGISTRY.get_or_init(|| {
        HotspotRegistry::from_json(EMBEDDED_HOTSPOTS)
            .unwrap_or_else(|e| panic!("Failed to parse embedded hotspot data: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(target: &str) -> String {
        format!(
            r#"{{"target":"{}","outline":"M 0 0 L 8 0 L 8 8 Z"}}"#,
            target
        )
    }

    fn frames(count: usize, target: &str) -> String {
        let frame = format!("[{}]", region(target));
        let all: Vec<String> = (0..count).map(|_| frame.clone()).collect();
        format!("[{}]", all.join(","))
    }

    fn fixture(project_frames: usize, t1_t2_frames: usize) -> String {
        format!(
            r#"{{"project":{},"towers":{{"t1_t2":{},"t3_t4":{},"t5_t6":{}}},"floors":{{"T1":[{}]}}}}"#,
            frames(project_frames, "T1"),
            frames(t1_t2_frames, "1"),
            frames(15, "1"),
            frames(15, "1"),
            region("Unit 1"),
        )
    }

    #[test]
    fn test_valid_document_parses() {
        let registry = HotspotRegistry::from_json(&fixture(4, 15)).unwrap();
        assert_eq!(registry.project_frame(0).len(), 1);
        assert_eq!(registry.project_frame(0)[0].target, "T1");
        assert_eq!(registry.tower_frame(AssetGroup::T1T2, 14).len(), 1);
        assert_eq!(registry.floor_plan_count(), 1);
        assert_eq!(registry.region_count(), 4 + 3 * 15 + 1);
    }

    #[test]
    fn test_floor_plan_lookup_canonicalizes() {
        let registry = HotspotRegistry::from_json(&fixture(4, 15)).unwrap();
        assert!(registry.floor_plan("T1").is_some());
        assert!(registry.floor_plan("1").is_some());
        assert!(registry.floor_plan("T2").is_none());
    }

    #[test]
    fn test_out_of_range_frames_have_no_hotspots() {
        let registry = HotspotRegistry::from_json(&fixture(4, 15)).unwrap();
        assert!(registry.project_frame(99).is_empty());
        assert!(registry.tower_frame(AssetGroup::T5T6, 99).is_empty());
    }

    #[test]
    fn test_wrong_project_frame_count_is_rejected() {
        let err = HotspotRegistry::from_json(&fixture(3, 15)).unwrap_err();
        assert!(err.contains("project frames"), "unexpected error: {err}");
    }

    #[test]
    fn test_wrong_tower_frame_count_is_rejected() {
        let err = HotspotRegistry::from_json(&fixture(4, 14)).unwrap_err();
        assert!(err.contains("expected 15 frames"), "unexpected error: {err}");
    }

    #[test]
    fn test_missing_group_is_rejected() {
        let raw = format!(
            r#"{{"project":{},"towers":{{"t1_t2":{}}},"floors":{{}}}}"#,
            frames(4, "T1"),
            frames(15, "1"),
        );
        let err = HotspotRegistry::from_json(&raw).unwrap_err();
        assert!(err.contains("No tower frames"), "unexpected error: {err}");
    }

    #[test]
    fn test_unknown_group_key_is_rejected() {
        let raw = format!(
            r#"{{"project":{},"towers":{{"t1_t2":{},"t3_t4":{},"t5_t6":{},"t2_t3":{}}},"floors":{{}}}}"#,
            frames(4, "T1"),
            frames(15, "1"),
            frames(15, "1"),
            frames(15, "1"),
            frames(15, "1"),
        );
        let err = HotspotRegistry::from_json(&raw).unwrap_err();
        assert!(err.contains("unknown group"), "unexpected error: {err}");
    }

    #[test]
    fn test_unknown_floor_key_is_rejected() {
        let raw = format!(
            r#"{{"project":{},"towers":{{"t1_t2":{},"t3_t4":{},"t5_t6":{}}},"floors":{{"T9":[]}}}}"#,
            frames(4, "T1"),
            frames(15, "1"),
            frames(15, "1"),
            frames(15, "1"),
        );
        let err = HotspotRegistry::from_json(&raw).unwrap_err();
        assert!(err.contains("unknown tower"), "unexpected error: {err}");
    }

    #[test]
    fn test_floor_keys_that_canonicalize_to_the_same_tower_are_rejected() {
        let raw = format!(
            r#"{{"project":{},"towers":{{"t1_t2":{},"t3_t4":{},"t5_t6":{}}},"floors":{{"1":[],"T1":[]}}}}"#,
            frames(4, "T1"),
            frames(15, "1"),
            frames(15, "1"),
            frames(15, "1"),
        );
        let err = HotspotRegistry::from_json(&raw).unwrap_err();
        assert!(err.contains("Duplicate floor plan"), "unexpected error: {err}");
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = HotspotRegistry::from_json("not json").unwrap_err();
        assert!(err.contains("Failed to parse"), "unexpected error: {err}");
    }

    #[test]
    fn test_registry_debug_output_names_every_group() {
        let registry = HotspotRegistry::from_json(&fixture(4, 15)).unwrap();
        let dump = format!("{registry:?}");
        for group in AssetGroup::GROUPS {
            assert!(dump.contains(&format!("{group:?}")), "no {group} in debug output");
        }
    }

    #[test]
    fn test_embedded_document_covers_every_scene() {
        let registry = global();
        assert_eq!(registry.project_frames().len(), PROJECT_FRAME_COUNT);
        for group in AssetGroup::GROUPS {
            assert_eq!(registry.tower_frames(group).len(), TOWER_FRAME_COUNT);
        }
        assert_eq!(registry.floor_plan_count(), 6);
        for tower in ["T1", "T2", "T3", "T4", "T5", "T6"] {
            let plan = registry.floor_plan(tower);
            assert!(plan.is_some_and(|p| !p.is_empty()), "no plan for {tower}");
        }
    }

    #[test]
    fn test_embedded_frames_all_have_hotspots() {
        let registry = global();
        for index in 0..PROJECT_FRAME_COUNT {
            assert!(
                !registry.project_frame(index).is_empty(),
                "project frame {index} is empty"
            );
        }
        for group in AssetGroup::GROUPS {
            for index in 0..TOWER_FRAME_COUNT {
                assert!(
                    !registry.tower_frame(group, index).is_empty(),
                    "{group} frame {index} is empty"
                );
            }
        }
    }
}
