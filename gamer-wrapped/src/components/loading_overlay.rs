//! Loading overlay component.

use dioxus::prelude::*;

/// Covers a chart while its year is being refetched; the bars stay visible underneath.
#[component]
pub fn LoadingOverlay() -> Element {
    rsx! {
        div {
            style: "position: absolute; inset: 0; display: flex; justify-content: center; align-items: center; gap: 8px; background: rgba(15, 23, 42, 0.6); color: #e2e8f0; border-radius: 12px;",
            "Refreshing..."
        }
    }
}
