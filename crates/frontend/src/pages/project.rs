use dioxus::prelude::*;
use sector66_shared::assets::{self, PROJECT_FRAME_COUNT};
use sector66_shared::carousel::FrameCycle;
use sector66_shared::models::View;
use sector66_shared::nav;
use sector66_shared::registry;

use crate::components::frame_controls::FrameControls;
use crate::components::hotspot_overlay::HotspotOverlay;
use crate::components::navbar::Navbar;

/// Project overview: an orbit carousel of aerial renders with one clickable
/// outline per visible tower.
#[component]
pub fn ProjectPage() -> Element {
    let nav_handle = navigator();
    let frame = use_signal(|| FrameCycle::new(PROJECT_FRAME_COUNT));

    let index = frame.read().index();
    let image = assets::project_frame_path(index);
    let regions = registry::global().project_frame(index).to_vec();

    rsx! {
        div { class: "stage stage-sky",
            div { class: "scene project-scene",
                img { class: "scene-image", src: "{image}", draggable: "false" }
                HotspotOverlay {
                    regions,
                    on_pick: move |target: String| {
                        match nav::resolve(registry::global(), &View::Project, &target) {
                            Ok(next) => {
                                nav_handle.push(crate::route_for(&next));
                            }
                            Err(err) => tracing::warn!(%err, "Ignoring click"),
                        }
                    },
                }
            }
            Navbar { view: View::Project }
            FrameControls { frame }
        }
    }
}
