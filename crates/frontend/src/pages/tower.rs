use dioxus::prelude::*;
use sector66_shared::assets::{self, TOWER_FRAME_COUNT};
use sector66_shared::carousel::FrameCycle;
use sector66_shared::models::{AssetGroup, View};
use sector66_shared::nav;
use sector66_shared::registry;

use crate::components::frame_controls::FrameControls;
use crate::components::hotspot_overlay::HotspotOverlay;
use crate::components::navbar::Navbar;
use crate::components::placeholder::Placeholder;

/// Tower view: the asset group's orbit carousel with one clickable band per
/// floor. The route keeps the raw tower id; only asset lookups go through the
/// group.
#[component]
pub fn TowerPage(tower: String) -> Element {
    let nav_handle = navigator();
    let frame = use_signal(|| FrameCycle::new(TOWER_FRAME_COUNT));

    let Some(group) = AssetGroup::for_tower(&tower) else {
        tracing::warn!(tower = %tower, "No asset group for tower");
        return rsx! {
            Placeholder {}
        };
    };

    let index = frame.read().index();
    let image = assets::tower_frame_path(group, index);
    let regions = registry::global().tower_frame(group, index).to_vec();
    let view = View::Tower {
        tower: tower.clone(),
    };
    let click_view = view.clone();

    rsx! {
        div { class: "stage stage-sky",
            div { class: "scene tower-scene",
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
            FrameControls { frame }
        }
    }
}
