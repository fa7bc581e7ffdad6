use dioxus::prelude::*;

/// Neutral fallback scene for routes whose assets cannot be resolved.
#[component]
pub fn Placeholder() -> Element {
    rsx! {
        div { class: "stage stage-sky",
            p { class: "placeholder-text", "Loading..." }
        }
    }
}
