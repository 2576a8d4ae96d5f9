use dioxus::prelude::*;

/// Shown until the URL has been inspected.
#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "loading-view",
            p { class: "loading-text", "Loading App..." }
        }
    }
}
