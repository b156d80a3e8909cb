use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLayoutDashboard;
use dioxus_free_icons::Icon;

/// Catch-all for paths outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::warn!(%path, "Unknown route");

    rsx! {
        div { class: "not-found-page",
            MissingPage { path }
        }
    }
}

/// "404" card with a way back to the dashboard.
#[component]
pub fn MissingPage(path: String) -> Element {
    rsx! {
        div { class: "not-found-card",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Page Not Found" }
            p { class: "not-found-message",
                "The page "
                code { "{path}" }
                " does not exist in WorkSphere."
            }
            Link { to: Route::Dashboard {}, class: "not-found-link",
                Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                "Back to Dashboard"
            }
        }
    }
}
