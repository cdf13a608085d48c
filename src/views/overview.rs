use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::api::{BackendClient, EventRecord, NodeRecord, PodRecord, ResourceKind, ServiceRecord};
use crate::components::{EventCard, ServiceCard, StatusCard};
use crate::contexts::{ApiResult, BackendContext};
use crate::status::{aggregate_node_status, aggregate_pod_status, FetchState};

const OVERVIEW_CSS: Asset = asset!("/assets/styling/overview.css");

async fn list_resource<T: DeserializeOwned>(
    client: ApiResult<BackendClient>,
    kind: ResourceKind,
) -> ApiResult<Vec<T>> {
    client?.list(kind).await
}

/// The Overview page: four independent fetches feeding the summary cards
#[component]
pub fn Overview() -> Element {
    let backend = use_context::<BackendContext>();

    // The client is built outside the future so each resource re-runs when the settings change
    let mut nodes = use_resource(move || {
        let client = backend.client();
        list_resource::<NodeRecord>(client, ResourceKind::Nodes)
    });
    let mut pods = use_resource(move || {
        let client = backend.client();
        list_resource::<PodRecord>(client, ResourceKind::Pods)
    });
    let mut events = use_resource(move || {
        let client = backend.client();
        list_resource::<EventRecord>(client, ResourceKind::Events)
    });
    let mut services = use_resource(move || {
        let client = backend.client();
        list_resource::<ServiceRecord>(client, ResourceKind::Services)
    });

    let refresh = move |_: Event<MouseData>| {
        nodes.restart();
        pods.restart();
        events.restart();
        services.restart();
    };

    let node_state = FetchState::from_result(Option::as_ref(&*nodes.read()));
    let pod_state = FetchState::from_result(Option::as_ref(&*pods.read()));
    let event_state = FetchState::from_result(Option::as_ref(&*events.read()));
    let service_state = FetchState::from_result(Option::as_ref(&*services.read()));

    let node_status = aggregate_node_status(node_state.items());
    let pod_status = aggregate_pod_status(pod_state.items());
    let backend_url = backend.backend_url();

    rsx! {
        document::Link { rel: "stylesheet", href: OVERVIEW_CSS }

        div { class: "overview-container",
            div { class: "overview-header",
                div { class: "header-left",
                    h2 { "Overview" }
                    p { "Kubernetes Cluster Overview" }
                    span { class: "backend-url", "{backend_url}" }
                }
                div { class: "header-actions",
                    button { class: "btn btn-secondary", onclick: refresh, "Refresh" }
                }
            }

            div { class: "card-container",
                StatusCard {
                    title: "Nodes",
                    statuses: node_status,
                    load: node_state.status(),
                }
                StatusCard {
                    title: "Pods",
                    statuses: pod_status,
                    load: pod_state.status(),
                }
                ServiceCard {
                    title: "Services",
                    services: service_state.data().cloned().unwrap_or_default(),
                    load: service_state.status(),
                }
            }

            div { class: "card-container",
                EventCard {
                    events: event_state.data().cloned().unwrap_or_default(),
                    load: event_state.status(),
                }
            }
        }
    }
}
