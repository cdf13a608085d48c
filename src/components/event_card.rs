use dioxus::prelude::*;

use super::LoadIndicator;
use crate::api::{event_lines, EventRecord};
use crate::status::LoadStatus;

#[derive(Props, PartialEq, Clone)]
pub struct EventCardProps {
    pub events: Vec<EventRecord>,
    pub load: LoadStatus,
}

#[component]
pub fn EventCard(props: EventCardProps) -> Element {
    let lines = event_lines(Some(props.events.as_slice()));
    let line_class = if props.events.is_empty() { "" } else { "event-warning" };

    rsx! {
        div { class: "event-card",
            h4 { "Events" }
            LoadIndicator { status: props.load.clone() }
            {lines.iter().map(|line| rsx! {
                p { class: line_class, "{line}" }
            })}
        }
    }
}
