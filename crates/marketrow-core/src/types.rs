// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Marketrow marketplace client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub i64);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub i64);

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grouping label for services (e.g. "Plumbing").
///
/// Fetched once when the browse view mounts, read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Category reference embedded in a service record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// One service row as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: ServiceId,
    pub name: String,
    pub image: String,
    pub category: CategoryRef,
}

/// The provider offering a service, embedded in the detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRef {
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
}

/// Full record for one service, shown in the details modal.
///
/// Only `id`, `name`, `image`, and `category` are guaranteed by the
/// backend; richer records carry the remaining fields, which default
/// to absent when missing from the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetail {
    pub id: ServiceId,
    pub name: String,
    pub image: String,
    pub category: CategoryRef,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub provider: Option<ProviderRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_list_payload_decodes() {
        let payload = r#"[{"id":1,"name":"Plumbing"},{"id":2,"name":"Electrical"}]"#;
        let categories: Vec<Category> = serde_json::from_str(payload).expect("decode");
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, CategoryId(1));
        assert_eq!(categories[1].name, "Electrical");
    }

    #[test]
    fn service_payload_decodes_nested_category() {
        let payload = r#"{"id":10,"name":"Pipe Fix","image":"/img/pipe.jpg","category":{"name":"Plumbing"}}"#;
        let service: ServiceSummary = serde_json::from_str(payload).expect("decode");
        assert_eq!(service.id, ServiceId(10));
        assert_eq!(service.category.name, "Plumbing");
    }

    #[test]
    fn detail_tolerates_minimal_record() {
        // Records without the richer fields still decode.
        let payload = r#"{"id":10,"name":"Pipe Fix","image":"/img/pipe.jpg","category":{"name":"Plumbing"}}"#;
        let detail: ServiceDetail = serde_json::from_str(payload).expect("decode");
        assert!(detail.description.is_none());
        assert!(detail.price.is_none());
        assert!(detail.provider.is_none());
        assert!(detail.created_at.is_none());
    }

    #[test]
    fn detail_decodes_full_record() {
        let payload = r#"{
            "id": 10,
            "name": "Pipe Fix",
            "image": "/img/pipe.jpg",
            "category": {"name": "Plumbing"},
            "description": "Leak repair and pipe replacement.",
            "price": 49.5,
            "provider": {"name": "A. Sharma", "city": "Pune"},
            "created_at": "2025-11-02T08:30:00Z"
        }"#;
        let detail: ServiceDetail = serde_json::from_str(payload).expect("decode");
        assert_eq!(detail.price, Some(49.5));
        let provider = detail.provider.expect("provider present");
        assert_eq!(provider.city.as_deref(), Some("Pune"));
        assert!(detail.created_at.is_some());
    }
}
