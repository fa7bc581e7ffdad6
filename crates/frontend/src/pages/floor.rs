use dioxus::prelude::*;
use sector66_shared::assets;
use sector66_shared::models::View;
use sector66_shared::nav;
use sector66_shared::registry;

use crate::components::hotspot_overlay::HotspotOverlay;
use crate::components::navbar::Navbar;
use crate::components::placeholder::Placeholder;

/// Floor view: the tower's typical plan sheet with one clickable outline per
/// unit. The plan does not rotate, so there is no carousel here.
#[component]
pub fn FloorPage(tower: String, floor: String) -> Element {
    let nav_handle = navigator();

    let Some(plan) = registry::global().floor_plan(&tower) else {
        tracing::warn!(tower = %tower, "No floor plan for tower");
        return rsx! {
            Placeholder {}
        };
    };

    let regions = plan.to_vec();
    let image = assets::floor_plan_path(&tower);
    let view = View::Floor {
        tower: tower.clone(),
        floor: floor.clone(),
    };
    let click_view = view.clone();

    rsx! {
        div { class: "stage stage-earth",
            div { class: "scene floor-scene",
                img { class: "scene-image", src: "{image}", draggable: "false" }
                HotspotOverlay {
                    regions,
                    on_pick: move |target: String| {
                        match nav::resolve(registry::global(), &click_view, &target) {
                            Ok(next) => {
                                nav_handle.push(crate::route_for(&next));
                            }
                            Err(err) => tracing::warn!(%err, "Ignoring click"),
                        }
                    },
                }
            }
            Navbar { view }
        }
    }
}
