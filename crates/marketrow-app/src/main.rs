// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Marketrow — Local-Services Marketplace Browsing Client
//
// Entry point. Initialises logging, backend services, app state, and
// launches the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::browse::Browse;
use pages::home::Home;
use pages::settings::Settings;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Marketrow starting");

    dioxus::launch(app);
}

/// Top-level route enum.
///
/// `Browse` carries an optional category as a query parameter so that
/// links elsewhere in the app (the Home shortcuts) can pre-select a
/// category on arrival.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(NavLayout)]
    #[route("/")]
    Home {},
    #[route("/browse?:category")]
    Browse { category: String },
    #[route("/settings")]
    Settings {},
}

/// Root component.
fn app() -> Element {
    // Load persisted settings and build the backend API client
    let svc = use_hook(AppServices::init);

    // Provide services and state as context for all pages
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent top navigation bar wrapping all pages.
#[component]
fn NavLayout() -> Element {
    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            // Top nav bar
            nav { class: "nav-bar",
                style: "display: flex; align-items: center; gap: 24px; padding: 12px 24px; border-bottom: 1px solid #e0e0e0; background: #fafafa;",
                span { style: "font-size: 18px; font-weight: bold; color: #1e3a8a;", "Marketrow" }
                NavLink { to: Route::Home {}, label: "Home" }
                NavLink { to: Route::Browse { category: String::new() }, label: "Browse" }
                NavLink { to: Route::Settings {}, label: "Settings" }
            }

            // Page content
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link { to: to,
            style: "text-decoration: none; color: #333; font-size: 14px;",
            "{label}"
        }
    }
}
