use dioxus::prelude::*;
use sector66_shared::assets::{VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use sector66_shared::models::Region;

/// SVG overlay stretched over the scene image. Outlines are authored against
/// the fixed viewBox and stretch exactly like the image underneath, so they
/// stay glued to the frame at any viewport size. A click reports the region's
/// target id to the page.
#[component]
pub fn HotspotOverlay(regions: Vec<Region>, on_pick: EventHandler<String>) -> Element {
    let paths: Vec<(String, String)> = regions
        .into_iter()
        .map(|region| (region.target, region.outline))
        .collect();

    rsx! {
        svg {
            class: "hotspot-overlay",
            view_box: "0 0 {VIEWBOX_WIDTH} {VIEWBOX_HEIGHT}",
            preserve_aspect_ratio: "none",
            for (target, outline) in paths {
                path {
                    class: "hotspot",
                    d: "{outline}",
                    onclick: move |_| on_pick.call(target.clone()),
                }
            }
        }
    }
}
