use crate::routes::not_found::MissingPage;
use crate::routes::sidebar::NavIcon;
use dioxus::prelude::*;
use shared_types::find_item;

/// Frame for a role-area page such as `/hr/employees`.
///
/// Access has already been checked by the guard. Paths inside a role area
/// that have no menu entry render the 404 card within the app layout.
#[component]
pub fn Section(area: String, page: String) -> Element {
    let path = format!("/{area}/{page}");

    match find_item(&path) {
        Some((section, item)) => rsx! {
            div { class: "section-page",
                div { class: "section-header",
                    NavIcon { icon: item.icon, size: 24 }
                    div {
                        p { class: "section-breadcrumb", "{section.label}" }
                        h2 { class: "section-title", "{item.label}" }
                    }
                }
                div { class: "panel section-body",
                    p { class: "section-empty", "Nothing to show here yet." }
                }
            }
        },
        None => rsx! { MissingPage { path } },
    }
}
