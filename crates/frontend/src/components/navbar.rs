use dioxus::prelude::*;
use sector66_shared::models::{canonical_tower_id, View};

/// Breadcrumb text for the current location. The project root has none; the
/// floor crumb shows the canonical tower id while tower and unit crumbs keep
/// the raw route parameter.
fn breadcrumb_label(view: &View) -> Option<String> {
    match view {
        View::Project => None,
        View::Tower { tower } => Some(format!("Tower {tower}")),
        View::Floor { tower, floor } => Some(format!(
            "Tower {} - Floor {}",
            canonical_tower_id(tower),
            floor
        )),
        // Unit targets already carry the "Unit N" wording
        View::Unit { tower, floor, unit } => Some(format!("Tower {tower} - Floor {floor} - {unit}")),
    }
}

/// Floating navigation bar: project button, a disabled breadcrumb, and a back
/// control leading one level up.
#[component]
pub fn Navbar(view: View) -> Element {
    let nav = navigator();
    let crumb = breadcrumb_label(&view);
    let parent = view.parent();

    rsx! {
        div { class: "navbar",
            button {
                class: "navbar-button",
                onclick: move |_| {
                    nav.push(crate::Route::Home {});
                },
                "Sector 66"
            }
            if let Some(crumb) = crumb {
                button { class: "navbar-button", disabled: true, "{crumb}" }
            }
            if let Some(parent) = parent {
                button {
                    class: "navbar-button",
                    onclick: move |_| {
                        nav.push(crate::route_for(&parent));
                    },
                    "⬅"
                }
            }
        }
    }
}
