use dioxus::prelude::*;
use wishcard_core::ConfettiPiece;

/// Falling confetti pieces. Empty while no burst is active.
#[component]
pub fn ConfettiLayer(pieces: Vec<ConfettiPiece>) -> Element {
    if pieces.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "confetti-layer", "aria-hidden": "true",
            for piece in pieces {
                div {
                    key: "{piece.id}",
                    class: "confetti-piece",
                    style: "{piece.style()}",
                }
            }
        }
    }
}
