// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Category filtering — the pure derivation behind the service grid.

use crate::types::ServiceSummary;

/// Derive the visible subset of services for the active category.
///
/// Exact, case-sensitive match on the category name. The input slice
/// is never mutated; the result is a fresh list recomputed on every
/// call, so the UI can register this as a reactive derivation over
/// {services, active category}.
pub fn filter_by_category(services: &[ServiceSummary], active: &str) -> Vec<ServiceSummary> {
    services
        .iter()
        .filter(|service| service.category.name == active)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryRef, ServiceId};

    fn service(id: i64, name: &str, category: &str) -> ServiceSummary {
        ServiceSummary {
            id: ServiceId(id),
            name: name.into(),
            image: format!("/img/{id}.jpg"),
            category: CategoryRef {
                name: category.into(),
            },
        }
    }

    #[test]
    fn keeps_exactly_the_matching_subset() {
        let services = vec![
            service(10, "Pipe Fix", "Plumbing"),
            service(11, "Wiring", "Electrical"),
        ];

        let filtered = filter_by_category(&services, "Plumbing");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Pipe Fix");
    }

    #[test]
    fn no_matches_yields_empty_list() {
        let services = vec![service(10, "Pipe Fix", "Plumbing")];
        assert!(filter_by_category(&services, "Gardening").is_empty());
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(filter_by_category(&[], "Plumbing").is_empty());
    }

    #[test]
    fn match_is_case_sensitive() {
        let services = vec![service(10, "Pipe Fix", "Plumbing")];
        assert!(filter_by_category(&services, "plumbing").is_empty());
    }

    #[test]
    fn input_list_is_left_untouched() {
        let services = vec![
            service(10, "Pipe Fix", "Plumbing"),
            service(11, "Wiring", "Electrical"),
        ];
        let before = services.clone();

        let _ = filter_by_category(&services, "Electrical");
        assert_eq!(services, before);
    }

    #[test]
    fn every_match_is_included() {
        let services = vec![
            service(10, "Pipe Fix", "Plumbing"),
            service(11, "Wiring", "Electrical"),
            service(12, "Drain Cleaning", "Plumbing"),
            service(13, "Geyser Install", "Plumbing"),
        ];

        let filtered = filter_by_category(&services, "Plumbing");
        let ids: Vec<i64> = filtered.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![10, 12, 13]);
    }
}
