use crate::contexts::BackendContext;
use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let backend = use_context::<BackendContext>();
    let backend_url = backend.backend_url();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            div {
                id: "sidebar",
                class: "k8s-sidebar",
                div {
                    class: "sidebar-logo",
                    span { "Cluster Dashboard" }
                }
                nav {
                    class: "sidebar-links",
                    div { class: "nav-group",
                        span { class: "nav-group-title", "CLUSTER" }
                        Link {
                            to: Route::Overview {},
                            class: "nav-overview",
                            "Overview"
                        }
                    }
                    div { class: "nav-group",
                        span { class: "nav-group-title", "SETTINGS" }
                        Link {
                            to: Route::BackendSettings {},
                            class: "nav-settings",
                            "Backend"
                        }
                    }
                }
                div { class: "sidebar-footer",
                    span { class: "nav-group-title", "CONNECTED TO" }
                    span { class: "sidebar-backend-url", "{backend_url}" }
                }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
