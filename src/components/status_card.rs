use dioxus::prelude::*;

use super::LoadIndicator;
use crate::status::{LoadStatus, StatusSummary};

#[derive(Props, PartialEq, Clone)]
pub struct StatusCardProps {
    pub title: String,
    pub statuses: StatusSummary,
    pub load: LoadStatus,
}

#[component]
pub fn StatusCard(props: StatusCardProps) -> Element {
    rsx! {
        div { class: "status-card",
            h4 { "{props.title}" }
            LoadIndicator { status: props.load.clone() }
            {props.statuses.iter().map(|status| rsx! {
                p { class: "status-line", "{status}" }
            })}
        }
    }
}
