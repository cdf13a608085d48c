use dioxus::prelude::*;

use super::LoadIndicator;
use crate::api::{service_names, service_total, ServiceRecord};
use crate::status::LoadStatus;

#[derive(Props, PartialEq, Clone)]
pub struct ServiceCardProps {
    pub title: String,
    pub services: Vec<ServiceRecord>,
    pub load: LoadStatus,
}

#[component]
pub fn ServiceCard(props: ServiceCardProps) -> Element {
    let services = Some(props.services.as_slice());
    let total = service_total(services);
    let names = service_names(services);

    rsx! {
        div { class: "status-card",
            h4 { "{props.title}" }
            LoadIndicator { status: props.load.clone() }
            p { class: "status-line", "Total: {total}" }
            ul { class: "service-list",
                {names.iter().map(|name| rsx! {
                    li { "{name}" }
                })}
            }
        }
    }
}
