// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — persisted configuration plus the shared
// marketplace API client handed to the Dioxus UI.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use marketrow_api::ApiClient;
use marketrow_core::AppConfig;
use marketrow_core::error::Result;
use marketrow_core::types::{Category, ServiceDetail, ServiceId, ServiceSummary};
use tracing::info;

use super::data_dir;

/// Shared application services accessible from all Dioxus components
/// via `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable (Arc-wrapped) so that the struct
/// can be passed into closures and async blocks without lifetime
/// issues.
#[derive(Clone)]
pub struct AppServices {
    api: Arc<Mutex<ApiClient>>,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services.  Call once at app startup.
    ///
    /// Loads persisted settings (falling back to defaults) and builds
    /// the API client for the configured backend.
    pub fn init() -> Self {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();
        info!(base_url = %config.api_base_url, "app services initialised");

        Self::with_config(config, dir)
    }

    /// Build services over an explicit config and data directory.
    pub fn with_config(config: AppConfig, data_dir: PathBuf) -> Self {
        let api = ApiClient::new(&config.api_base_url);
        Self {
            api: Arc::new(Mutex::new(api)),
            config: Arc::new(Mutex::new(config)),
            data_dir,
        }
    }

    // -- Marketplace API -----------------------------------------------------

    /// All marketplace categories.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let api = self.api_client();
        api.categories().await
    }

    /// All services across every category.
    pub async fn services(&self) -> Result<Vec<ServiceSummary>> {
        let api = self.api_client();
        api.services().await
    }

    /// Full record for one service.
    pub async fn service_detail(&self, id: ServiceId) -> Result<ServiceDetail> {
        let api = self.api_client();
        api.service_detail(id).await
    }

    /// Snapshot of the current API client (never held across awaits).
    fn api_client(&self) -> ApiClient {
        self.api.lock().expect("api lock poisoned").clone()
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config.
    ///
    /// The API client is rebuilt so a changed base URL takes effect on
    /// the next fetch.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        *self.api.lock().expect("api lock poisoned") = ApiClient::new(&config.api_base_url);
        persist_config(&self.data_dir, config)
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &std::path::Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &std::path::Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_reload_config() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let svc = AppServices::with_config(AppConfig::default(), tmp.path().to_path_buf());

        let mut config = svc.config();
        config.api_base_url = "http://127.0.0.1:9000".into();
        config.default_category = "Electrical".into();
        svc.save_config(&config).expect("save");

        let reloaded = load_config(tmp.path()).expect("config file present");
        assert_eq!(reloaded.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(reloaded.default_category, "Electrical");
    }

    #[test]
    fn missing_config_file_yields_none() {
        let tmp = tempfile::tempdir().expect("tempdir");
        assert!(load_config(tmp.path()).is_none());
    }

    #[test]
    fn corrupt_config_file_yields_none() {
        let tmp = tempfile::tempdir().expect("tempdir");
        std::fs::write(tmp.path().join(CONFIG_FILE), "{not json").expect("write");
        assert!(load_config(tmp.path()).is_none());
    }
}
