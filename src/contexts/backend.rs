use dioxus::prelude::*;
use std::time::Duration;

use super::error::ApiResult;
use crate::api::BackendClient;
use crate::utils::settings::Settings;

/// Context carrying the active backend settings. Views subscribe to it so a
/// changed URL re-runs their fetches.
#[derive(Clone, Copy)]
pub struct BackendContext {
    pub settings: Signal<Settings>,
}

impl BackendContext {
    pub fn backend_url(&self) -> String {
        self.settings.read().backend_url.clone()
    }

    /// Build a client for the current settings, subscribing the caller to changes
    pub fn client(&self) -> ApiResult<BackendClient> {
        let settings = self.settings.read();
        BackendClient::new(
            &settings.backend_url,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }
}
