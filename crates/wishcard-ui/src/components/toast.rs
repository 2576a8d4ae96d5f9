//! Toast - renders the current transient notice.

use dioxus::prelude::*;
use wishcard_core::Notice;

/// Fixed, centred popup for a notice. Renders nothing when `notice` is None.
#[component]
pub fn Toast(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "{notice.kind.class()}",
            role: "status",
            "{notice.text}"
        }
    }
}
