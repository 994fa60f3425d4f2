//! Application state and environment-driven configuration.

use std::path::PathBuf;
use std::sync::Arc;

use decoupage_core::{loader, Decoupage};

/// Default listen port, matching the original deployment.
pub const DEFAULT_PORT: u16 = 3000;

/// The single origin allowed to call the API from a browser.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://tonsessi.vercel.app";

/// Server configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Listen port (`DECOUPAGE_PORT`).
    pub port: u16,
    /// Allowed CORS origin (`DECOUPAGE_ALLOWED_ORIGIN`).
    pub allowed_origin: String,
    /// Optional dataset file overriding the bundled one (`DECOUPAGE_DATASET`).
    pub dataset_path: Option<PathBuf>,
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back
    /// to defaults for anything absent or unparseable.
    pub fn from_env() -> Self {
        let port = std::env::var("DECOUPAGE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let allowed_origin = std::env::var("DECOUPAGE_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());
        let dataset_path = std::env::var_os("DECOUPAGE_DATASET").map(PathBuf::from);
        Self {
            port,
            allowed_origin,
            dataset_path,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            dataset_path: None,
        }
    }
}

/// Shared application state.
///
/// The territorial tree is loaded once at startup and shared read-only
/// across all requests; there is no write path, so no locking.
#[derive(Clone)]
pub struct AppState {
    pub decoupage: Arc<Decoupage>,
    pub config: AppConfig,
}

impl AppState {
    /// State over the bundled dataset with default configuration.
    ///
    /// The bundled dataset is compiled in and covered by the core crate's
    /// tests, so failing to load it is a build defect, not a runtime
    /// condition.
    pub fn new() -> Self {
        let decoupage = loader::bundled().expect("bundled dataset is valid");
        Self::with_config(Arc::new(decoupage), AppConfig::default())
    }

    /// State over an already-loaded tree and explicit configuration.
    pub fn with_config(decoupage: Arc<Decoupage>, config: AppConfig) -> Self {
        Self { decoupage, config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_original_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.allowed_origin, "https://tonsessi.vercel.app");
        assert!(config.dataset_path.is_none());
    }

    #[test]
    fn state_over_bundled_dataset() {
        let state = AppState::new();
        assert_eq!(state.decoupage.stats().departements, 12);
    }
}
