// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Browse page — category pills, the filtered service grid, and the
// service details modal.

use dioxus::prelude::*;

use marketrow_core::filter::filter_by_category;
use marketrow_core::types::{ServiceDetail, ServiceId, ServiceSummary};

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Browse(category: String) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();

    // Inbound navigation state (a Home shortcut) selects a category
    // once, at view entry. Pill clicks take over from there.
    {
        let nav_category = category.clone();
        use_hook(move || {
            if !nav_category.is_empty() {
                state.write().active_category = nav_category;
            }
        });
    }

    // Fetch categories and services when the view mounts. The two
    // requests are independent and run concurrently; each resolves
    // into its own state slot, and a failure leaves that slot as-is.
    let svc_categories = svc.clone();
    let _categories = use_resource(move || {
        let svc = svc_categories.clone();
        async move {
            match svc.categories().await {
                Ok(categories) => state.write().categories = categories,
                Err(e) => tracing::error!(error = %e, "fetching categories failed"),
            }
        }
    });

    let svc_services = svc.clone();
    let _services = use_resource(move || {
        let svc = svc_services.clone();
        async move {
            match svc.services().await {
                Ok(services) => state.write().services = services,
                Err(e) => tracing::error!(error = %e, "fetching services failed"),
            }
        }
    });

    // Derived view over {services, active category} — recomputed when
    // either input changes, never mutated in place.
    let filtered = use_memo(move || {
        let st = state.read();
        filter_by_category(&st.services, &st.active_category)
    });

    rsx! {
        div { style: "max-width: 1100px; margin: 0 auto; padding: 32px 16px;",
            h2 { style: "font-size: 28px; font-weight: bold; color: #1e3a8a; text-align: center; margin-bottom: 4px;",
                "Browse by category"
            }
            p { style: "text-align: center; color: #666; margin-bottom: 28px;",
                "Explore our range of services tailored to your needs."
            }

            // Category pills
            div { style: "display: flex; flex-wrap: wrap; gap: 12px; justify-content: center; margin-bottom: 36px;",
                for cat in state.read().categories.iter() {
                    {
                        let name = cat.name.clone();
                        let is_active = state.read().active_category == name;
                        let (bg, fg, weight) = if is_active {
                            ("#dbeafe", "#1e3a8a", "600")
                        } else {
                            ("white", "#666", "400")
                        };
                        rsx! {
                            button {
                                style: "padding: 8px 28px; border-radius: 999px; border: 1px solid #e0e0e0; background: {bg}; color: {fg}; font-weight: {weight}; font-size: 16px; cursor: pointer;",
                                onclick: move |_| {
                                    state.write().active_category = name.clone();
                                },
                                "{cat.name}"
                            }
                        }
                    }
                }
            }

            // Service grid
            if filtered.read().is_empty() {
                p { style: "text-align: center; color: #aaa; margin: 48px 0;",
                    "No services in this category yet."
                }
            } else {
                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 20px;",
                    for service in filtered.read().iter() {
                        {
                            let id = service.id;
                            let svc = svc.clone();
                            rsx! {
                                ServiceCard {
                                    service: service.clone(),
                                    on_select: move |_| {
                                        let svc = svc.clone();
                                        spawn(async move {
                                            match svc.service_detail(id).await {
                                                Ok(detail) => {
                                                    let mut st = state.write();
                                                    st.selected_service = Some(detail);
                                                    st.modal_open = true;
                                                }
                                                Err(e) => {
                                                    tracing::error!(error = %e, service_id = %id, "fetching service details failed");
                                                }
                                            }
                                        });
                                    },
                                }
                            }
                        }
                    }
                }
            }

            // Service details modal
            if state.read().modal_open {
                ServiceDetailsModal {
                    service: state.read().selected_service.clone(),
                    on_close: move |_| {
                        state.write().modal_open = false;
                    },
                }
            }
        }
    }
}

/// One card in the service grid.
#[component]
fn ServiceCard(service: ServiceSummary, on_select: EventHandler<ServiceId>) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #e0e0e0; border-radius: 12px; overflow: hidden; background: white; cursor: pointer;",
            onclick: move |_| on_select.call(service.id),
            img {
                src: "{service.image}",
                alt: "{service.name}",
                style: "width: 100%; height: 140px; object-fit: cover; display: block; background: #f0f0f0;",
            }
            div { style: "padding: 12px;",
                strong { "{service.name}" }
                p { style: "color: #888; font-size: 13px; margin: 4px 0 0;",
                    "{service.category.name}"
                }
            }
        }
    }
}

/// Overlay showing the full record for the selected service.
///
/// Closing only hides the overlay. The record itself is retained and
/// overwritten by the next card click before it is shown again.
#[component]
fn ServiceDetailsModal(service: Option<ServiceDetail>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 10;",
            onclick: move |_| on_close.call(()),

            div {
                style: "background: white; border-radius: 12px; max-width: 420px; width: 90%; overflow: hidden;",
                onclick: move |evt| evt.stop_propagation(),

                if let Some(ref detail) = service {
                    img {
                        src: "{detail.image}",
                        alt: "{detail.name}",
                        style: "width: 100%; height: 180px; object-fit: cover; display: block; background: #f0f0f0;",
                    }
                    div { style: "padding: 16px;",
                        h3 { style: "margin: 0 0 4px;", "{detail.name}" }
                        p { style: "color: #888; font-size: 13px; margin: 0 0 12px;",
                            "{detail.category.name}"
                        }
                        if let Some(ref description) = detail.description {
                            p { style: "color: #444; font-size: 14px; margin: 0 0 12px;",
                                "{description}"
                            }
                        }
                        if let Some(price) = detail.price {
                            p { style: "font-size: 15px; margin: 0 0 8px;",
                                strong { "Price: " }
                                "{price}"
                            }
                        }
                        if let Some(ref provider) = detail.provider {
                            p { style: "color: #666; font-size: 14px; margin: 0 0 8px;",
                                "Offered by {provider.name}"
                                if let Some(ref city) = provider.city {
                                    ", {city}"
                                }
                            }
                        }
                        if let Some(created_at) = detail.created_at {
                            {
                                let listed = created_at.format("%Y-%m-%d").to_string();
                                rsx! {
                                    p { style: "color: #aaa; font-size: 12px; margin: 0;",
                                        "Listed {listed}"
                                    }
                                }
                            }
                        }
                    }
                } else {
                    p { style: "padding: 24px; color: #888; text-align: center;",
                        "No service selected."
                    }
                }

                div { style: "padding: 12px 16px; border-top: 1px solid #f0f0f0; text-align: right;",
                    button {
                        style: "padding: 8px 24px; border-radius: 8px; border: 1px solid #ccc; background: white; color: #333; font-size: 14px; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
