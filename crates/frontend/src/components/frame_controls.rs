use dioxus::prelude::*;
use sector66_shared::carousel::FrameCycle;

/// Previous/next buttons floating at the scene edges, stepping an orbit
/// carousel one frame at a time.
#[component]
pub fn FrameControls(frame: Signal<FrameCycle>) -> Element {
    rsx! {
        div { class: "frame-controls",
            button {
                class: "frame-button",
                onclick: move |_| {
                    let cur = *frame.read();
                    frame.set(cur.previous());
                },
                "←"
            }
            button {
                class: "frame-button",
                onclick: move |_| {
                    let cur = *frame.read();
                    frame.set(cur.next());
                },
                "→"
            }
        }
    }
}
