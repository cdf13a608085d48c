use dioxus::{logger::tracing, prelude::*};

use crate::api::ResourceKind;
use crate::contexts::BackendContext;
use crate::utils::settings::{normalize_backend_url, Settings};

const SETTINGS_CSS: Asset = asset!("/assets/styling/settings.css");

#[derive(Clone, PartialEq)]
enum SaveOutcome {
    Saved(String),
    Failed(String),
}

#[derive(Clone, PartialEq)]
struct EndpointCheck {
    name: &'static str,
    path: &'static str,
    outcome: Result<usize, String>,
}

/// Lets the user point the dashboard at another backend and probe its endpoints
#[component]
pub fn BackendSettings() -> Element {
    let backend = use_context::<BackendContext>();
    let mut settings = backend.settings;

    let mut draft_url = use_signal(|| backend.backend_url());
    let mut save_outcome = use_signal(|| None::<SaveOutcome>);
    let mut checks = use_signal(Vec::<EndpointCheck>::new);
    let mut checking = use_signal(|| false);

    let mut apply = move |next: Settings| {
        let outcome = match next.save() {
            Ok(path) => {
                tracing::info!("Saved backend settings to {}", path.display());
                SaveOutcome::Saved(format!("Saved to {}", path.display()))
            }
            Err(e) => {
                tracing::error!("Failed to save settings: {}", e);
                SaveOutcome::Failed(format!("Applied for this session only: {}", e))
            }
        };
        draft_url.set(next.backend_url.clone());
        settings.set(next);
        checks.set(Vec::new());
        save_outcome.set(Some(outcome));
    };

    let save = move |_: Event<MouseData>| {
        let draft = draft_url.read().clone();
        match normalize_backend_url(&draft) {
            Ok(url) => {
                let next = Settings {
                    backend_url: url,
                    ..settings.read().clone()
                };
                apply(next);
            }
            Err(e) => save_outcome.set(Some(SaveOutcome::Failed(e.to_string()))),
        }
    };

    let reset = move |_: Event<MouseData>| apply(Settings::default());

    let check = move |_: Event<MouseData>| {
        let client = match backend.client() {
            Ok(client) => client,
            Err(e) => {
                save_outcome.set(Some(SaveOutcome::Failed(e.to_string())));
                return;
            }
        };

        checking.set(true);
        spawn(async move {
            let results = client
                .check_endpoints()
                .await
                .into_iter()
                .map(|(kind, result): (ResourceKind, _)| EndpointCheck {
                    name: kind.display_name(),
                    path: kind.path(),
                    outcome: result.map_err(|e| e.to_string()),
                })
                .collect();
            checks.set(results);
            checking.set(false);
        });
    };

    let timeout_secs = settings.read().request_timeout_secs;

    rsx! {
        document::Link { rel: "stylesheet", href: SETTINGS_CSS }

        div { class: "settings-container",
            div { class: "settings-header",
                h2 { "Backend" }
                p { "Where the dashboard fetches nodes, pods, events and services from" }
            }

            div { class: "settings-input-group",
                label { r#for: "backend-url-input", "Backend URL:" }
                input {
                    id: "backend-url-input",
                    r#type: "text",
                    value: "{draft_url}",
                    oninput: move |evt| draft_url.set(evt.value()),
                }
                span { class: "settings-hint",
                    "Request timeout: {timeout_secs}s"
                }
            }

            div { class: "settings-buttons",
                button {
                    class: "btn btn-primary",
                    disabled: draft_url.read().trim().is_empty(),
                    onclick: save,
                    "Save"
                }
                button { class: "btn btn-secondary", onclick: reset, "Reset" }
                button {
                    class: "btn btn-secondary",
                    disabled: checking(),
                    onclick: check,
                    if checking() { "Checking..." } else { "Test Connection" }
                }
            }

            {match save_outcome() {
                Some(SaveOutcome::Saved(message)) => rsx! {
                    p { class: "settings-message success", "{message}" }
                },
                Some(SaveOutcome::Failed(message)) => rsx! {
                    p { class: "settings-message error", "{message}" }
                },
                None => rsx! {},
            }}

            if !checks.read().is_empty() {
                table { class: "endpoint-table",
                    thead {
                        tr {
                            th { "Resource" }
                            th { "Endpoint" }
                            th { "Result" }
                        }
                    }
                    tbody {
                        {checks.read().iter().map(|check| {
                            let (class, result) = match &check.outcome {
                                Ok(count) => ("status-healthy", format!("{} records", count)),
                                Err(e) => ("status-error", e.clone()),
                            };
                            rsx! {
                                tr {
                                    td { "{check.name}" }
                                    td { "{check.path}" }
                                    td { class: "{class}", "{result}" }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
