/// Configuration constants for the application
pub mod config {
    /// Backend used when nothing has been configured
    pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

    /// Seconds before a single resource fetch is abandoned
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    /// Environment variable overriding the configured backend URL
    pub const BACKEND_URL_ENV: &str = "CLUSTER_OVERVIEW_BACKEND_URL";

    /// Directory (relative to the home directory) holding persisted settings
    pub const SETTINGS_STORAGE_DIR: &str = ".cluster-overview";

    pub const SETTINGS_FILE_NAME: &str = "settings.json";
}

/// Persisted dashboard settings
pub mod settings {
    use super::config::*;
    use crate::contexts::{SettingsError, SettingsResult};
    use dioxus::logger::tracing;
    use serde::{Deserialize, Serialize};
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    #[serde(default)]
    pub struct Settings {
        pub backend_url: String,
        pub request_timeout_secs: u64,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                backend_url: DEFAULT_BACKEND_URL.to_string(),
                request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            }
        }
    }

    impl Settings {
        /// Load settings from the user's settings file, then apply the environment override.
        /// Any failure falls back to defaults so the dashboard can always start.
        pub fn load() -> Self {
            let mut settings = match settings_file_path().and_then(|path| Self::load_from(&path)) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::error!("Failed to load settings, using defaults: {}", e);
                    Self::default()
                }
            };

            if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
                match normalize_backend_url(&url) {
                    Ok(url) => settings.backend_url = url,
                    Err(e) => tracing::warn!("Ignoring {}: {}", BACKEND_URL_ENV, e),
                }
            }

            settings
        }

        /// Read settings from `path`; a missing file yields the defaults
        pub fn load_from(path: &Path) -> SettingsResult<Self> {
            if !path.exists() {
                return Ok(Self::default());
            }

            let contents = fs::read_to_string(path)?;
            let mut settings: Settings = serde_json::from_str(&contents)?;
            settings.backend_url = normalize_backend_url(&settings.backend_url)?;

            // A zero timeout would fail every request before it is sent
            if settings.request_timeout_secs == 0 {
                tracing::warn!(
                    "Ignoring request_timeout_secs = 0 in {}, using {}s",
                    path.display(),
                    DEFAULT_REQUEST_TIMEOUT_SECS
                );
                settings.request_timeout_secs = DEFAULT_REQUEST_TIMEOUT_SECS;
            }

            Ok(settings)
        }

        pub fn save(&self) -> SettingsResult<PathBuf> {
            let path = settings_file_path()?;
            self.save_to(&path)?;
            Ok(path)
        }

        pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = serde_json::to_string_pretty(self)?;
            fs::write(path, contents)?;
            Ok(())
        }
    }

    /// Path of the settings file under the home directory
    pub fn settings_file_path() -> SettingsResult<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(SettingsError::HomeNotFound)?;
        Ok(home_dir.join(SETTINGS_STORAGE_DIR).join(SETTINGS_FILE_NAME))
    }

    /// Trim whitespace and trailing slashes, and require an http(s) scheme
    pub fn normalize_backend_url(url: &str) -> SettingsResult<String> {
        let trimmed = url.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(SettingsError::InvalidUrl("URL is empty".to_string()));
        }

        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| SettingsError::InvalidUrl(format!("{} must start with http:// or https://", trimmed)))?;

        if host.is_empty() {
            return Err(SettingsError::InvalidUrl(format!("{} has no host", trimmed)));
        }

        Ok(trimmed.to_string())
    }
}
