use dioxus::prelude::*;
use sector66_shared::assets;
use sector66_shared::models::View;

use crate::components::navbar::Navbar;

/// Unit view: the layout sheet for one flat. This is a leaf; nothing here is
/// clickable except the navbar.
#[component]
pub fn UnitPage(tower: String, floor: String, unit: String) -> Element {
    let image = assets::unit_layout_path();
    let view = View::Unit { tower, floor, unit };
    let alt = format!("{} layout", view.unit_id().unwrap_or_default());

    rsx! {
        div { class: "stage stage-earth",
            div { class: "scene unit-scene",
                img { class: "unit-image", src: "{image}", alt: "{alt}" }
            }
            Navbar { view }
        }
    }
}
