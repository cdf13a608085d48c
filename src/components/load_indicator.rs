use dioxus::prelude::*;

use crate::status::LoadStatus;

/// Renders the outcome of a fetch; nothing once the data is ready
#[component]
pub fn LoadIndicator(status: LoadStatus) -> Element {
    match status {
        LoadStatus::Loading => rsx! {
            p { class: "load-indicator loading", "Loading..." }
        },
        LoadStatus::Error(reason) => rsx! {
            p { class: "load-indicator error", title: "{reason}", "Error loading data" }
        },
        LoadStatus::Ready => rsx! {},
    }
}
