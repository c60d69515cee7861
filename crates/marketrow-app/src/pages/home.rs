// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — hero copy and popular-category shortcuts.

use dioxus::prelude::*;

use crate::Route;

/// Categories surfaced as shortcuts on the landing page. Clicking one
/// lands on the browse view with that category pre-selected.
const POPULAR_CATEGORIES: [&str; 4] = ["Plumbing", "Electrical", "Cleaning", "Carpentry"];

#[component]
pub fn Home() -> Element {
    rsx! {
        div { style: "max-width: 900px; margin: 0 auto; padding: 48px 16px;",
            h1 { style: "font-size: 36px; color: #1e3a8a; text-align: center; margin-bottom: 8px;",
                "Find local help for any job"
            }
            p { style: "color: #666; font-size: 18px; text-align: center; margin-bottom: 40px;",
                "Browse trusted services in your neighbourhood."
            }

            // Popular categories
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin: 24px 0;",
                for name in POPULAR_CATEGORIES {
                    CategoryShortcut { name }
                }
            }

            div { style: "text-align: center; margin-top: 32px;",
                Link {
                    to: Route::Browse { category: String::new() },
                    style: "display: inline-block; padding: 12px 32px; border-radius: 8px; background: #1e3a8a; color: white; font-size: 16px; text-decoration: none;",
                    "Browse all services"
                }
            }
        }
    }
}

#[component]
fn CategoryShortcut(name: &'static str) -> Element {
    rsx! {
        Link {
            to: Route::Browse { category: name.to_string() },
            style: "display: flex; align-items: center; justify-content: center; padding: 24px 16px; border: 1px solid #e0e0e0; border-radius: 12px; text-decoration: none; color: #333; background: white;",
            span { style: "font-size: 16px;", "{name}" }
        }
    }
}
