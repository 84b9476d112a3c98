use dioxus::prelude::*;

/// Pulsing placeholder card shown while a search is in flight.
#[component]
pub fn SkeletonCard() -> Element {
    rsx! {
        div { class: "result-card skeleton-card",
            div { class: "skeleton-line skeleton-title" }
            div { class: "skeleton-line skeleton-full" }
            div { class: "skeleton-line skeleton-short" }
        }
    }
}
