// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// REST client for the marketplace backend.
//
// Three read-only operations drive the entire browsing UI: list
// categories, list services, fetch one service by id. Each call is
// independent; callers decide what a failure means (the UI logs it and
// keeps whatever it was showing).

use serde::de::DeserializeOwned;
use tracing::debug;

use marketrow_core::error::{MarketrowError, Result};
use marketrow_core::types::{Category, ServiceDetail, ServiceId, ServiceSummary};

/// Client for the marketplace REST API.
///
/// Cheap to clone; all clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// All marketplace categories.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.get_json("/api/my-categories").await
    }

    /// All services across every category.
    pub async fn services(&self) -> Result<Vec<ServiceSummary>> {
        self.get_json("/api/my-services").await
    }

    /// The full record for one service.
    pub async fn service_detail(&self, id: ServiceId) -> Result<ServiceDetail> {
        self.get_json(&format!("/api/my-services/{id}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketrowError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketrowError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        debug!(%url, "GET ok");

        response
            .json::<T>()
            .await
            .map_err(|e| MarketrowError::Decode(e.to_string()))
    }
}
