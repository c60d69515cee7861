// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use marketrow_core::AppConfig;
use marketrow_core::types::{Category, ServiceDetail, ServiceSummary};

use crate::services::app_services::AppServices;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All marketplace categories, fetched when the browse view mounts.
    pub categories: Vec<Category>,
    /// All services across every category.
    pub services: Vec<ServiceSummary>,
    /// Category name currently selected for filtering the grid.
    pub active_category: String,
    /// Detail record shown in the modal. Retained after close: a
    /// reopen without a new card click shows the previous record.
    pub selected_service: Option<ServiceDetail>,
    /// Whether the service details modal is visible.
    pub modal_open: bool,
    /// Application settings (edit buffer for the settings page).
    pub config: AppConfig,
}

impl AppState {
    /// Create initial state from the backend services.
    pub fn new(svc: &AppServices) -> Self {
        let config = svc.config();

        Self {
            categories: Vec::new(),
            services: Vec::new(),
            active_category: config.default_category.clone(),
            selected_service: None,
            modal_open: false,
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            categories: Vec::new(),
            services: Vec::new(),
            active_category: config.default_category.clone(),
            selected_service: None,
            modal_open: false,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketrow_core::types::{CategoryRef, ServiceId};

    #[test]
    fn initial_state_seeds_active_category_from_config() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            default_category: "Electrical".into(),
            ..AppConfig::default()
        };
        let svc = AppServices::with_config(config, tmp.path().to_path_buf());

        let state = AppState::new(&svc);
        assert_eq!(state.active_category, "Electrical");
        assert!(state.categories.is_empty());
        assert!(state.services.is_empty());
        assert!(!state.modal_open);
    }

    #[test]
    fn closing_the_modal_keeps_the_fetched_detail() {
        let mut state = AppState::default();
        state.selected_service = Some(ServiceDetail {
            id: ServiceId(10),
            name: "Pipe Fix".into(),
            image: "/img/pipe.jpg".into(),
            category: CategoryRef {
                name: "Plumbing".into(),
            },
            description: None,
            price: None,
            provider: None,
            created_at: None,
        });
        state.modal_open = true;

        // Close clears visibility only; the record stays for a reopen.
        state.modal_open = false;
        assert!(state.selected_service.is_some());
    }
}
