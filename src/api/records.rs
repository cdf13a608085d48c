use serde::Deserialize;

/// One cluster node as reported by the backend.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NodeRecord {
    pub status: Option<String>,
}

/// One workload pod as reported by the backend.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PodRecord {
    pub status: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ServiceRecord {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EventRecord {
    pub namespace: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

impl EventRecord {
    /// Formats the event as `[namespace] reason: message`
    pub fn display_line(&self) -> String {
        let message = self
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("No message");

        format!(
            "[{}] {}: {}",
            self.namespace.as_deref().unwrap_or_default(),
            self.reason.as_deref().unwrap_or_default(),
            message
        )
    }
}

/// Lines for the events card; a single placeholder line when there are no events
pub fn event_lines(events: Option<&[EventRecord]>) -> Vec<String> {
    let events = events.unwrap_or_default();
    if events.is_empty() {
        return vec!["No events available.".to_string()];
    }

    events.iter().map(EventRecord::display_line).collect()
}

/// Number of services, treating an absent list as empty
pub fn service_total(services: Option<&[ServiceRecord]>) -> usize {
    services.map_or(0, <[ServiceRecord]>::len)
}

pub fn service_names(services: Option<&[ServiceRecord]>) -> Vec<String> {
    services
        .unwrap_or_default()
        .iter()
        .map(|service| service.name.clone())
        .collect()
}
